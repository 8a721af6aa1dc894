use super::{CompiledDimension, CompiledMetric, Field, FieldId};
use crate::data_source::RawField;
use indexmap::IndexMap;
use log::debug;

/// Result columns split into dimensions and metrics, keyed by [`FieldId`]
/// in the order the columns were returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedFields {
    pub dimensions: IndexMap<FieldId, CompiledDimension>,
    pub metrics: IndexMap<FieldId, CompiledMetric>,
}

impl ClassifiedFields {
    pub fn dimension_keys(&self) -> Vec<FieldId> {
        self.dimensions.keys().cloned().collect()
    }

    pub fn metric_keys(&self) -> Vec<FieldId> {
        self.metrics.keys().cloned().collect()
    }

    /// Dimension ids followed by metric ids.
    pub fn column_order(&self) -> Vec<FieldId> {
        self.dimensions
            .keys()
            .chain(self.metrics.keys())
            .cloned()
            .collect()
    }

    /// Both mappings merged, dimensions first.
    pub fn fields_map(&self) -> IndexMap<FieldId, Field> {
        let dimensions = self
            .dimensions
            .iter()
            .map(|(id, dimension)| (id.clone(), Field::Dimension(dimension.clone())));
        let metrics = self
            .metrics
            .iter()
            .map(|(id, metric)| (id.clone(), Field::Metric(metric.clone())));
        dimensions.chain(metrics).collect()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len() + self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies every result column: numbers become auto-generated metrics,
/// everything else (unknown types included) becomes a dimension.
pub fn classify_fields<'a, I>(table: &str, fields: I) -> ClassifiedFields
where
    I: IntoIterator<Item = (&'a String, &'a RawField)>,
{
    let mut classified = ClassifiedFields::default();

    for (name, raw_field) in fields {
        if raw_field.declared_type.is_numeric() {
            let metric = CompiledMetric::from_column(table, name);
            classified.metrics.insert(metric.id(), metric);
        } else {
            let dimension =
                CompiledDimension::from_column(table, name, raw_field.declared_type.clone());
            classified.dimensions.insert(dimension.id(), dimension);
        }
    }

    debug!(
        "Classified result columns: {} dimensions, {} metrics",
        classified.dimensions.len(),
        classified.metrics.len()
    );
    classified
}
