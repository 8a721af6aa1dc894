mod local_source;
mod scalar_type;

pub use local_source::{read_json_file, LocalQueryDataSource};
pub use scalar_type::ScalarType;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// QueryDataSource hands out the latest snapshot of an ad-hoc query result
///
/// `None` means the query is still pending or was never run. A new snapshot
/// must be a new `Arc`; consumers use pointer identity to detect changes.
pub trait QueryDataSource {
    fn query_data(&self) -> Option<Arc<QueryData>>;
}

/// Column metadata and rows produced by the query runner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryData {
    #[serde(default)]
    pub fields: IndexMap<String, RawField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<RawRow>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    #[serde(rename = "type")]
    pub declared_type: ScalarType,
}

impl RawField {
    pub fn new(declared_type: ScalarType) -> Self {
        Self { declared_type }
    }
}

/// One result row, column name to cell value, in the order the columns came back.
pub type RawRow = IndexMap<String, RawValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Null,
    Boolean(bool),
    Int(i64),
    #[serde(serialize_with = "serialize_float")]
    Float(f64),
    String(String),
    Array(Vec<RawValue>),
    Object(IndexMap<String, RawValue>),
}

/// Plain string coercion, the same text a script runtime would produce for
/// the value. No locale or type aware formatting is applied.
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => f.write_str("null"),
            RawValue::Boolean(v) => write!(f, "{}", v),
            RawValue::Int(v) => write!(f, "{}", v),
            RawValue::Float(v) => write_float(f, *v),
            RawValue::String(v) => f.write_str(v),
            RawValue::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    if !matches!(item, RawValue::Null) {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            RawValue::Object(_) => f.write_str("[object Object]"),
        }
    }
}

/// Largest magnitude below which every integer is exactly representable as f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integral floats go back out as JSON integers, so a `42.0` cell reads `42`
/// on the wire just like its formatted text.
fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return f.write_str("0");
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exponent = format!("{:e}", value);
        match exponent.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{}e+{}", mantissa, exp),
            _ => f.write_str(&exponent),
        }
    } else {
        write!(f, "{}", value)
    }
}

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid JSON format: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
