use super::{ChartType, ChartTypeConfig, PivotConfig};
use log::debug;
use serde::{Deserialize, Serialize};

/// Chart settings a session was opened with, e.g. from a shared link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSavedChartSeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_config: Option<ChartConfigSeed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_config: Option<PivotConfig>,
}

/// Unvalidated chart config: the type is known, the config may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigSeed {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ChartTypeConfig>,
}

/// User adjustable chart settings. Setters do not validate anything; the
/// config is only checked when a payload is assembled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualizationState {
    chart_type: ChartType,
    chart_config: Option<ChartTypeConfig>,
    pivot_fields: Option<Vec<String>>,
}

impl VisualizationState {
    pub fn from_seed(seed: Option<&CreateSavedChartSeed>) -> Self {
        let chart_config = seed.and_then(|seed| seed.chart_config.as_ref());
        let state = Self {
            chart_type: chart_config.map(|c| c.chart_type).unwrap_or_default(),
            chart_config: chart_config.and_then(|c| c.config.clone()),
            pivot_fields: seed
                .and_then(|seed| seed.pivot_config.as_ref())
                .map(|pivot| pivot.columns.clone()),
        };
        debug!(
            "Visualization state seeded: chart_type={}, has_config={}, pivot_fields={:?}",
            state.chart_type,
            state.chart_config.is_some(),
            state.pivot_fields
        );
        state
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn chart_config(&self) -> Option<&ChartTypeConfig> {
        self.chart_config.as_ref()
    }

    pub fn pivot_fields(&self) -> Option<&[String]> {
        self.pivot_fields.as_deref()
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    pub fn set_chart_config(&mut self, chart_config: Option<ChartTypeConfig>) {
        self.chart_config = chart_config;
    }

    pub fn set_pivot_fields(&mut self, pivot_fields: Option<Vec<String>>) {
        self.pivot_fields = pivot_fields;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_without_seed() {
        let state = VisualizationState::from_seed(None);
        assert_eq!(state.chart_type(), ChartType::Cartesian);
        assert!(state.chart_config().is_none());
        assert!(state.pivot_fields().is_none());
    }

    #[test]
    fn test_seeded_from_initial_state() {
        let seed: CreateSavedChartSeed = serde_json::from_value(json!({
            "chartConfig": {"type": "big_number", "config": {"label": "Revenue"}},
            "pivotConfig": {"columns": ["region"]}
        }))
        .unwrap();
        let state = VisualizationState::from_seed(Some(&seed));

        assert_eq!(state.chart_type(), ChartType::BigNumber);
        assert_eq!(state.chart_config(), Some(&json!({"label": "Revenue"})));
        assert_eq!(state.pivot_fields(), Some(&["region".to_string()][..]));
    }

    #[test]
    fn test_seed_without_chart_config_keeps_default_type() {
        let seed = CreateSavedChartSeed {
            chart_config: None,
            pivot_config: Some(PivotConfig {
                columns: vec!["a".to_string()],
            }),
        };
        let state = VisualizationState::from_seed(Some(&seed));
        assert_eq!(state.chart_type(), ChartType::Cartesian);
        assert!(state.chart_config().is_none());
    }

    #[test]
    fn test_setters_replace_values() {
        let mut state = VisualizationState::from_seed(None);
        state.set_chart_type(ChartType::Table);
        state.set_chart_config(Some(json!({"showTableNames": true})));
        state.set_pivot_fields(Some(vec!["sql_runner_region".to_string()]));

        assert_eq!(state.chart_type(), ChartType::Table);
        assert_eq!(state.chart_config(), Some(&json!({"showTableNames": true})));
        assert_eq!(
            state.pivot_fields(),
            Some(&["sql_runner_region".to_string()][..])
        );

        state.set_pivot_fields(None);
        assert!(state.pivot_fields().is_none());
    }
}
