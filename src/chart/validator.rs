use super::{ChartConfig, ChartType, ChartTypeConfig};
use serde_json::{json, Value};

/// Repairs a possibly partial config into one that is valid for the
/// given chart type. Implementations must be pure and must not fail.
pub trait ChartConfigValidator {
    fn validate(&self, chart_type: ChartType, config: Option<&ChartTypeConfig>) -> ChartConfig;
}

impl<F> ChartConfigValidator for F
where
    F: Fn(ChartType, Option<&ChartTypeConfig>) -> ChartConfig,
{
    fn validate(&self, chart_type: ChartType, config: Option<&ChartTypeConfig>) -> ChartConfig {
        self(chart_type, config)
    }
}

/// Keeps a config when it has the right shape for the chart type and
/// falls back to that type's empty config otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultChartConfigValidator;

impl DefaultChartConfigValidator {
    pub fn empty_config(chart_type: ChartType) -> ChartTypeConfig {
        match chart_type {
            ChartType::Cartesian => json!({"layout": {}, "eChartsConfig": {"series": []}}),
            ChartType::Table | ChartType::BigNumber | ChartType::Pie => json!({}),
        }
    }

    fn is_valid(chart_type: ChartType, config: &ChartTypeConfig) -> bool {
        match chart_type {
            ChartType::Cartesian => {
                config.get("layout").is_some_and(Value::is_object)
                    && config.get("eChartsConfig").is_some_and(Value::is_object)
            }
            ChartType::Table | ChartType::BigNumber | ChartType::Pie => config.is_object(),
        }
    }
}

impl ChartConfigValidator for DefaultChartConfigValidator {
    fn validate(&self, chart_type: ChartType, config: Option<&ChartTypeConfig>) -> ChartConfig {
        let config = match config {
            Some(config) if Self::is_valid(chart_type, config) => config.clone(),
            _ => Self::empty_config(chart_type),
        };
        ChartConfig { chart_type, config }
    }
}
