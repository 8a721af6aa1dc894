use super::{
    ChartConfigValidator, ChartType, ChartTypeConfig, CreateSavedChartVersion, PivotConfig,
    TableConfig,
};
use crate::results::ApiQueryResults;
use crate::semantic_model::FieldId;
use log::debug;

/// Builds the payload for saving the current chart.
///
/// Nothing can be saved before the query produced results, so `None`
/// results give `None`.
pub fn assemble_chart_version<V>(
    table_name: &str,
    results: Option<&ApiQueryResults>,
    chart_type: ChartType,
    chart_config: Option<&ChartTypeConfig>,
    pivot_fields: Option<&[String]>,
    column_order: &[FieldId],
    validator: &V,
) -> Option<CreateSavedChartVersion>
where
    V: ChartConfigValidator + ?Sized,
{
    let results = results?;
    debug!(
        "Assembling {} chart for '{}' ({} columns, pivoted: {})",
        chart_type,
        table_name,
        column_order.len(),
        pivot_fields.is_some()
    );

    Some(CreateSavedChartVersion {
        table_name: table_name.to_string(),
        metric_query: results.metric_query.clone(),
        pivot_config: pivot_fields.map(|columns| PivotConfig {
            columns: columns.to_vec(),
        }),
        chart_config: validator.validate(chart_type, chart_config),
        table_config: TableConfig {
            column_order: column_order.to_vec(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartConfig, DefaultChartConfigValidator};
    use crate::results::{CacheMetadata, MetricQuery};
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn results() -> ApiQueryResults {
        ApiQueryResults {
            metric_query: MetricQuery::unfiltered(
                vec!["sql_runner_region".to_string()],
                vec!["sql_runner_amount".to_string()],
            ),
            cache_metadata: CacheMetadata::default(),
            rows: vec![],
        }
    }

    fn column_order() -> Vec<FieldId> {
        vec![
            "sql_runner_region".to_string(),
            "sql_runner_amount".to_string(),
        ]
    }

    #[test]
    fn test_no_results_no_payload() {
        let payload = assemble_chart_version(
            "sql_runner",
            None,
            ChartType::Cartesian,
            None,
            Some(&["region".to_string()][..]),
            &column_order(),
            &DefaultChartConfigValidator,
        );
        assert!(payload.is_none());
    }

    #[rstest]
    fn test_payload_without_pivot(results: ApiQueryResults) {
        let payload = assemble_chart_version(
            "sql_runner",
            Some(&results),
            ChartType::Table,
            None,
            None,
            &column_order(),
            &DefaultChartConfigValidator,
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "tableName": "sql_runner",
                "metricQuery": {
                    "dimensions": ["sql_runner_region"],
                    "metrics": ["sql_runner_amount"],
                    "filters": {},
                    "sorts": [],
                    "limit": 0,
                    "tableCalculations": []
                },
                "chartConfig": {"type": "table", "config": {}},
                "tableConfig": {"columnOrder": ["sql_runner_region", "sql_runner_amount"]}
            })
        );
    }

    #[rstest]
    fn test_payload_with_pivot(results: ApiQueryResults) {
        let pivot = vec!["region".to_string()];
        let payload = assemble_chart_version(
            "sql_runner",
            Some(&results),
            ChartType::Cartesian,
            None,
            Some(pivot.as_slice()),
            &column_order(),
            &DefaultChartConfigValidator,
        )
        .unwrap();

        assert_eq!(payload.pivot_config, Some(PivotConfig { columns: pivot }));
        assert_eq!(payload.metric_query, results.metric_query);
    }

    #[rstest]
    fn test_config_goes_through_validator(results: ApiQueryResults) {
        let validator = |chart_type: ChartType, config: Option<&ChartTypeConfig>| ChartConfig {
            chart_type,
            config: json!({"seen": config.cloned()}),
        };
        let raw = json!({"anything": 1});
        let payload = assemble_chart_version(
            "sql_runner",
            Some(&results),
            ChartType::Pie,
            Some(&raw),
            None,
            &column_order(),
            &validator,
        )
        .unwrap();

        assert_eq!(payload.chart_config.chart_type, ChartType::Pie);
        assert_eq!(payload.chart_config.config, json!({"seen": {"anything": 1}}));
    }
}
