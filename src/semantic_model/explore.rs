use super::{ClassifiedFields, CompiledDimension, CompiledMetric, FieldId};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Warehouse dialect an explore is compiled against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetDatabase {
    Bigquery,
    Databricks,
    #[default]
    Postgres,
    Redshift,
    Snowflake,
    Trino,
}

impl TargetDatabase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetDatabase::Bigquery => "bigquery",
            TargetDatabase::Databricks => "databricks",
            TargetDatabase::Postgres => "postgres",
            TargetDatabase::Redshift => "redshift",
            TargetDatabase::Snowflake => "snowflake",
            TargetDatabase::Trino => "trino",
        }
    }
}

impl FromStr for TargetDatabase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bigquery" => Ok(TargetDatabase::Bigquery),
            "databricks" => Ok(TargetDatabase::Databricks),
            "postgres" => Ok(TargetDatabase::Postgres),
            "redshift" => Ok(TargetDatabase::Redshift),
            "snowflake" => Ok(TargetDatabase::Snowflake),
            "trino" => Ok(TargetDatabase::Trino),
            _ => Err(format!("Unknown target database: {}", s)),
        }
    }
}

impl fmt::Display for TargetDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreTable {
    pub name: String,
    pub label: String,
    pub database: String,
    pub schema: String,
    pub sql_table: String,
    pub dimensions: IndexMap<FieldId, CompiledDimension>,
    pub metrics: IndexMap<FieldId, CompiledMetric>,
    pub lineage_graph: BTreeMap<String, Vec<String>>,
}

/// Table descriptor the chart layer reads field definitions from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explore {
    pub name: String,
    pub label: String,
    pub tags: Vec<String>,
    pub base_table: String,
    pub joined_tables: Vec<String>,
    pub tables: IndexMap<String, ExploreTable>,
    pub target_database: TargetDatabase,
}

impl Explore {
    pub fn base(&self) -> Option<&ExploreTable> {
        self.tables.get(&self.base_table)
    }
}

/// Wraps the classified fields in a single-table explore with no joins.
pub fn synthesize_explore(
    table: &str,
    target_database: TargetDatabase,
    fields: &ClassifiedFields,
) -> Explore {
    debug!(
        "Building explore '{}' with {} fields for {}",
        table,
        fields.len(),
        target_database
    );
    let explore_table = ExploreTable {
        name: table.to_string(),
        label: String::new(),
        database: String::new(),
        schema: String::new(),
        sql_table: String::new(),
        dimensions: fields.dimensions.clone(),
        metrics: fields.metrics.clone(),
        lineage_graph: BTreeMap::new(),
    };

    let mut tables = IndexMap::new();
    tables.insert(table.to_string(), explore_table);

    Explore {
        name: table.to_string(),
        label: String::new(),
        tags: Vec::new(),
        base_table: table.to_string(),
        joined_tables: Vec::new(),
        tables,
        target_database,
    }
}
