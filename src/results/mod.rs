use crate::data_source::{RawRow, RawValue};
use crate::semantic_model::{field_id, FieldId};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// `limit` value meaning no limit was applied to the preview. It is only
/// carried through for the chart layer and never used as a row cap.
pub const UNBOUNDED_LIMIT: u64 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortField {
    pub field_id: FieldId,
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCalculation {
    pub name: String,
    pub display_name: String,
    pub sql: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricQuery {
    pub dimensions: Vec<FieldId>,
    pub metrics: Vec<FieldId>,
    pub filters: Filters,
    pub sorts: Vec<SortField>,
    pub limit: u64,
    pub table_calculations: Vec<TableCalculation>,
}

impl MetricQuery {
    /// Query shape for an ad-hoc result: every column selected, nothing
    /// filtered, sorted or calculated.
    pub fn unfiltered(dimensions: Vec<FieldId>, metrics: Vec<FieldId>) -> Self {
        Self {
            dimensions,
            metrics,
            filters: Filters::default(),
            sorts: Vec::new(),
            limit: UNBOUNDED_LIMIT,
            table_calculations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheMetadata {
    pub cache_hit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedValue {
    pub raw: RawValue,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultValue {
    pub value: FormattedValue,
}

impl From<&RawValue> for ResultValue {
    fn from(raw: &RawValue) -> Self {
        Self {
            value: FormattedValue {
                formatted: raw.to_string(),
                raw: raw.clone(),
            },
        }
    }
}

pub type ResultRow = IndexMap<FieldId, ResultValue>;

/// Results in the shape the chart layer renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiQueryResults {
    pub metric_query: MetricQuery,
    pub cache_metadata: CacheMetadata,
    pub rows: Vec<ResultRow>,
}

/// Re-keys every cell by field id and wraps it with its string form.
///
/// Returns `None` while there are no rows (query pending). Row order and
/// the cells of each row are kept exactly as given.
pub fn reshape_results(
    table: &str,
    rows: Option<&[RawRow]>,
    dimensions: Vec<FieldId>,
    metrics: Vec<FieldId>,
) -> Option<ApiQueryResults> {
    let rows = rows?;

    let rows: Vec<ResultRow> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|(column_name, raw)| (field_id(table, column_name), ResultValue::from(raw)))
                .collect()
        })
        .collect();
    debug!("Reshaped {} result rows", rows.len());

    Some(ApiQueryResults {
        metric_query: MetricQuery::unfiltered(dimensions, metrics),
        cache_metadata: CacheMetadata { cache_hit: false },
        rows,
    })
}
