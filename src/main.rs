use log::{error, info, warn};
use std::error::Error;

use sqlviz::{
    chart::{CreateSavedChartSeed, DefaultChartConfigValidator},
    config::{CliConfig, Config},
    data_source::{read_json_file, LocalQueryDataSource, QueryDataSource},
    SqlQueryVisualization,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = Config::new().map_err(|e| {
        error!("Failed to initialize config: {}", e);
        e
    })?;

    let cli_config = CliConfig::new().map_err(|e| {
        error!("Failed to initialize CLI config: {}", e);
        e
    })?;

    let source = LocalQueryDataSource::from_path(&cli_config.results_path).map_err(|e| {
        error!("Failed to load query results: {}", e);
        e
    })?;

    let seed: Option<CreateSavedChartSeed> = match &cli_config.seed_path {
        Some(path) => Some(read_json_file(path).map_err(|e| {
            error!("Failed to load seed state: {}", e);
            e
        })?),
        None => None,
    };

    let mut visualization = SqlQueryVisualization::new(config, DefaultChartConfigValidator, seed);
    let data = source.query_data();
    let outputs = visualization.outputs(data.as_ref());

    match &outputs.create_saved_chart {
        Some(chart) => {
            info!(
                "Built {} chart over {} columns",
                chart.chart_config.chart_type,
                outputs.column_order.len()
            );
            println!("{}", serde_json::to_string_pretty(chart.as_ref())?);
        }
        None => {
            warn!("Query returned no rows yet, printing explore only");
            println!("{}", serde_json::to_string_pretty(outputs.explore.as_ref())?);
        }
    }

    Ok(())
}
