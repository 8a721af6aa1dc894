pub mod payload;
pub mod state;
pub mod validator;

pub use payload::assemble_chart_version;
pub use state::{ChartConfigSeed, CreateSavedChartSeed, VisualizationState};
pub use validator::{ChartConfigValidator, DefaultChartConfigValidator};

use crate::results::MetricQuery;
use crate::semantic_model::FieldId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Cartesian,
    Table,
    BigNumber,
    Pie,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartType::Cartesian => "cartesian",
            ChartType::Table => "table",
            ChartType::BigNumber => "big_number",
            ChartType::Pie => "pie",
        };
        f.write_str(name)
    }
}

/// Chart-type specific settings. Their shape belongs to the renderer, so
/// they are kept as plain JSON.
pub type ChartTypeConfig = serde_json::Value;

/// A chart type together with a config that is valid for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub config: ChartTypeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotConfig {
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub column_order: Vec<FieldId>,
}

/// Payload handed to the saved-chart store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSavedChartVersion {
    pub table_name: String,
    pub metric_query: MetricQuery,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_config: Option<PivotConfig>,
    pub chart_config: ChartConfig,
    pub table_config: TableConfig,
}
