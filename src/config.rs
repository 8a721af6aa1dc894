use crate::semantic_model::TargetDatabase;
use envconfig::Envconfig;
use log::debug;

/// Name of the synthetic table ad-hoc results are exposed under.
pub const SQL_RESULTS_TABLE_NAME: &str = "sql_runner";

#[derive(Envconfig, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[envconfig(from = "SQL_RUNNER_TABLE_NAME", default = "sql_runner")]
    pub table_name: String,

    #[envconfig(from = "SQL_RUNNER_TARGET_DATABASE", default = "postgres")]
    pub target_database: TargetDatabase,
}

impl Config {
    pub fn new() -> Result<Self, envconfig::Error> {
        let config = Self::init_from_env()?;
        debug!(
            "Config loaded: table_name={}, target_database={}",
            config.table_name, config.target_database
        );
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: SQL_RESULTS_TABLE_NAME.to_string(),
            target_database: TargetDatabase::default(),
        }
    }
}

#[derive(Envconfig, Debug, Clone)]
pub struct CliConfig {
    #[envconfig(from = "SQL_RUNNER_RESULTS_PATH", default = "query_results.json")]
    pub results_path: String,

    #[envconfig(from = "SQL_RUNNER_SEED_PATH")]
    pub seed_path: Option<String>,
}

impl CliConfig {
    pub fn new() -> Result<Self, envconfig::Error> {
        let config = Self::init_from_env()?;
        debug!(
            "CliConfig loaded: results_path={}, seed_path={:?}",
            config.results_path, config.seed_path
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::init_from_hashmap(&HashMap::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.table_name, "sql_runner");
        assert_eq!(config.target_database, TargetDatabase::Postgres);
    }

    #[test]
    fn test_overrides() {
        let env = HashMap::from([
            ("SQL_RUNNER_TABLE_NAME".to_string(), "preview".to_string()),
            ("SQL_RUNNER_TARGET_DATABASE".to_string(), "snowflake".to_string()),
        ]);
        let config = Config::init_from_hashmap(&env).unwrap();
        assert_eq!(config.table_name, "preview");
        assert_eq!(config.target_database, TargetDatabase::Snowflake);
    }

    #[test]
    fn test_unknown_target_database_is_rejected() {
        let env = HashMap::from([(
            "SQL_RUNNER_TARGET_DATABASE".to_string(),
            "oracle".to_string(),
        )]);
        assert!(Config::init_from_hashmap(&env).is_err());
    }

    #[test]
    fn test_cli_seed_path_is_optional() {
        let config = CliConfig::init_from_hashmap(&HashMap::new()).unwrap();
        assert_eq!(config.results_path, "query_results.json");
        assert!(config.seed_path.is_none());
    }
}
