pub mod classifier;
pub mod explore;

pub use classifier::{classify_fields, ClassifiedFields};
pub use explore::{synthesize_explore, Explore, ExploreTable, TargetDatabase};

use crate::data_source::ScalarType;
use crate::utils::naming::friendly_name;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Key of a field in field maps and result rows: `<table>_<column>`.
pub type FieldId = String;

pub fn field_id(table: &str, name: &str) -> FieldId {
    format!("{}_{}", table, name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Dimension,
    Metric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledDimension {
    pub field_type: FieldType,
    #[serde(rename = "type")]
    pub dimension_type: ScalarType,
    pub name: String,
    pub label: String,
    pub table: String,
    pub table_label: String,
    pub sql: String,
    pub compiled_sql: String,
    pub tables_references: Vec<String>,
    pub hidden: bool,
}

impl CompiledDimension {
    /// Dimension for a result column; there is no SQL behind it.
    pub fn from_column(table: &str, name: &str, dimension_type: ScalarType) -> Self {
        Self {
            field_type: FieldType::Dimension,
            dimension_type,
            name: name.to_string(),
            label: friendly_name(name),
            table: table.to_string(),
            table_label: String::new(),
            sql: String::new(),
            compiled_sql: String::new(),
            tables_references: vec![table.to_string()],
            hidden: false,
        }
    }

    pub fn id(&self) -> FieldId {
        field_id(&self.table, &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledMetric {
    pub field_type: FieldType,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub is_auto_generated: bool,
    pub name: String,
    pub label: String,
    pub table: String,
    pub table_label: String,
    pub sql: String,
    pub compiled_sql: String,
    pub tables_references: Vec<String>,
    pub hidden: bool,
}

impl CompiledMetric {
    /// Auto-generated number metric for a numeric result column.
    pub fn from_column(table: &str, name: &str) -> Self {
        Self {
            field_type: FieldType::Metric,
            metric_type: MetricType::Number,
            is_auto_generated: true,
            name: name.to_string(),
            label: friendly_name(name),
            table: table.to_string(),
            table_label: String::new(),
            sql: String::new(),
            compiled_sql: String::new(),
            tables_references: vec![table.to_string()],
            hidden: false,
        }
    }

    pub fn id(&self) -> FieldId {
        field_id(&self.table, &self.name)
    }
}

/// A classified result column. Each variant carries its own `fieldType`
/// tag on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Dimension(CompiledDimension),
    Metric(CompiledMetric),
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Field::Dimension(dimension) => &dimension.name,
            Field::Metric(metric) => &metric.name,
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Field::Dimension(_) => FieldType::Dimension,
            Field::Metric(_) => FieldType::Metric,
        }
    }

    pub fn id(&self) -> FieldId {
        match self {
            Field::Dimension(dimension) => dimension.id(),
            Field::Metric(metric) => metric.id(),
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let field_type = value
            .get("fieldType")
            .cloned()
            .ok_or_else(|| D::Error::missing_field("fieldType"))?;

        match FieldType::deserialize(field_type).map_err(D::Error::custom)? {
            FieldType::Dimension => CompiledDimension::deserialize(value)
                .map(Field::Dimension)
                .map_err(D::Error::custom),
            FieldType::Metric => CompiledMetric::deserialize(value)
                .map(Field::Metric)
                .map_err(D::Error::custom),
        }
    }
}
