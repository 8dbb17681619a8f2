//! Service configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::store::StoreConfig;

/// Root configuration loaded from the YAML config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Store backend configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Loads configuration from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref())
        .map_err(|e| Error::InvalidInput(format!("Failed to read config file: {}", e)))?;

    serde_yaml::from_str(&contents)
        .map_err(|e| Error::InvalidInput(format!("Failed to parse config file: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::store::FileStoreConfig;

    use super::*;

    #[test]
    fn should_parse_file_store_config() {
        // given
        let yaml = r#"
store:
  type: File
  path: /var/lib/tracker/users.json
"#;

        // when
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // then
        assert_eq!(
            config.store,
            StoreConfig::File(FileStoreConfig {
                path: "/var/lib/tracker/users.json".to_string()
            })
        );
    }

    #[test]
    fn should_parse_in_memory_store_config() {
        // given
        let yaml = r#"
store:
  type: InMemory
"#;

        // when
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // then
        assert_eq!(config.store, StoreConfig::InMemory);
    }

    #[test]
    fn should_default_store_when_omitted() {
        // given
        let yaml = "{}";

        // when
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // then
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn should_fail_to_load_missing_file() {
        // when
        let result = load_config("/does/not/exist.yaml");

        // then
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
