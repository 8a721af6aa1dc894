//! Visualize ad-hoc SQL results with the semantic-layer chart pipeline.
//!
//! Result columns are classified into dimensions and auto-generated
//! metrics, wrapped in a synthetic single-table explore, and the rows are
//! re-keyed into the shape the chart layer renders from. A small state
//! container tracks the chart type, config and pivot columns the user
//! picked, and everything is assembled into a saveable chart payload.

pub mod chart;
pub mod config;
pub mod data_source;
pub mod results;
pub mod semantic_model;
pub mod utils;
pub mod visualization;


pub use visualization::{SqlQueryVisualization, VisualizationOutputs};
