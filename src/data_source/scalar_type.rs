use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a result column, as reported by the query runner.
///
/// Unknown type names are kept verbatim in [`ScalarType::Other`] so that
/// they can still be carried through as a dimension type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScalarType {
    String,
    Number,
    Timestamp,
    Date,
    Boolean,
    Other(String),
}

impl ScalarType {
    pub fn as_str(&self) -> &str {
        match self {
            ScalarType::String => "string",
            ScalarType::Number => "number",
            ScalarType::Timestamp => "timestamp",
            ScalarType::Date => "date",
            ScalarType::Boolean => "boolean",
            ScalarType::Other(name) => name,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ScalarType::Number)
    }
}

impl FromStr for ScalarType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scalar_type = match s.to_ascii_lowercase().as_str() {
            "string" => ScalarType::String,
            "number" => ScalarType::Number,
            "timestamp" => ScalarType::Timestamp,
            "date" => ScalarType::Date,
            "boolean" => ScalarType::Boolean,
            _ => ScalarType::Other(s.to_string()),
        };
        Ok(scalar_type)
    }
}

impl From<String> for ScalarType {
    fn from(value: String) -> Self {
        match value.parse::<ScalarType>() {
            Ok(scalar_type) => scalar_type,
            Err(never) => match never {},
        }
    }
}

impl From<ScalarType> for String {
    fn from(value: ScalarType) -> Self {
        match value {
            ScalarType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("number", ScalarType::Number)]
    #[case("NUMBER", ScalarType::Number)]
    #[case("string", ScalarType::String)]
    #[case("timestamp", ScalarType::Timestamp)]
    #[case("Date", ScalarType::Date)]
    #[case("boolean", ScalarType::Boolean)]
    fn test_from_str(#[case] input: &str, #[case] expected: ScalarType) {
        assert_eq!(ScalarType::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_from_str_unknown_type_is_kept_verbatim() {
        assert_eq!(
            ScalarType::from_str("Geography").unwrap(),
            ScalarType::Other("Geography".to_string())
        );
        assert_eq!(ScalarType::Other("Geography".to_string()).to_string(), "Geography");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&ScalarType::Timestamp).unwrap();
        assert_eq!(json, "\"timestamp\"");

        let parsed: ScalarType = serde_json::from_str("\"interval\"").unwrap();
        assert_eq!(parsed, ScalarType::Other("interval".to_string()));
    }
}
