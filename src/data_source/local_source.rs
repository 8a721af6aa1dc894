use super::{DataSourceError, QueryData, QueryDataSource};
use log::debug;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// Query data loaded once from a JSON file on disk.
#[derive(Clone, Debug)]
pub struct LocalQueryDataSource {
    data: Arc<QueryData>,
}

impl LocalQueryDataSource {
    pub fn new(data: QueryData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataSourceError> {
        let data: QueryData = read_json_file(path)?;
        debug!(
            "Loaded query data: {} fields, {} rows",
            data.fields.len(),
            data.rows.as_ref().map_or(0, Vec::len)
        );
        Ok(Self::new(data))
    }
}

impl QueryDataSource for LocalQueryDataSource {
    fn query_data(&self) -> Option<Arc<QueryData>> {
        Some(Arc::clone(&self.data))
    }
}

pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, DataSourceError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| DataSourceError::FileNotFound(format!("{}: {}", path.display(), e)))?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::{RawValue, ScalarType};

    #[test]
    fn test_from_path_missing_file() {
        let result = LocalQueryDataSource::from_path("does/not/exist.json");
        assert!(matches!(result, Err(DataSourceError::FileNotFound(_))));
    }

    #[test]
    fn test_from_path_reads_snapshot() {
        let path = std::env::temp_dir().join(format!("sqlviz-local-source-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"fields": {"amount": {"type": "number"}}, "rows": [{"amount": 3}]}"#,
        )
        .unwrap();

        let source = LocalQueryDataSource::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let data = source.query_data().unwrap();
        assert_eq!(data.fields["amount"].declared_type, ScalarType::Number);
        assert_eq!(data.rows.as_ref().unwrap()[0]["amount"], RawValue::Int(3));

        // same snapshot is handed out until the source changes
        assert!(Arc::ptr_eq(&data, &source.query_data().unwrap()));
    }

    #[test]
    fn test_invalid_json() {
        let path = std::env::temp_dir().join(format!("sqlviz-invalid-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<QueryData, _> = read_json_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DataSourceError::InvalidJson(_))));
    }
}
