//! Scanner configuration loading
//!
//! The YAML file location comes from `CONFIG_PATH`, falling back to
//! `config.yaml` in the working directory. Both the file and the string
//! entry points parse with serde_yaml and then run `AppConfig::validate`, so
//! a config that loads is always a config the scanner can run.

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

use super::types::AppConfig;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
/// Config file used when `CONFIG_PATH` is unset or empty
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Resolve the config file location from `CONFIG_PATH`
pub fn config_path_from_env() -> PathBuf {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}

/// Read, parse and validate the config file at `path`.
///
/// A missing file is a configuration error rather than an I/O error so the
/// message names the path the scanner looked at.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let yaml = std::fs::read_to_string(path)?;
    parse_and_validate(&yaml, &format!(" in '{}'", path.display()))
}

/// Parse and validate an in-memory YAML document
pub fn load_config_from_str(yaml_content: &str) -> Result<AppConfig> {
    parse_and_validate(yaml_content, "")
}

fn parse_and_validate(yaml: &str, origin: &str) -> Result<AppConfig> {
    let config: AppConfig = serde_yaml::from_str(yaml)
        .map_err(|e| AppError::Config(format!("YAML parse error{}: {}", origin, e)))?;
    config.validate()?;
    Ok(config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_CONFIG_YAML: &str = r#"
exchanges:
  - name: Binance
    id: binance
    markets: { spot: true, futures: true }
  - name: Bybit
    id: bybit
    markets: { spot: true, futures: true }
filters:
  quote: USDT
  only_active: true
arbitrage:
  min_spread_percent: 0.5
"#;

    #[test]
    fn test_load_config_from_str_valid() {
        let config = load_config_from_str(VALID_CONFIG_YAML).unwrap();
        assert_eq!(config.exchanges.len(), 2);
        assert_eq!(config.exchanges[0].id.as_str(), "binance");
        assert_eq!(config.arbitrage.min_spread_percent, 0.5);
    }

    #[test]
    fn test_load_config_from_str_invalid_yaml() {
        let result = load_config_from_str("invalid: yaml: content: [");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }

    #[test]
    fn test_load_config_from_str_validation_failure() {
        let duplicate = r#"
exchanges:
  - name: Binance
    id: binance
  - name: Binance again
    id: binance
filters:
  quote: USDT
arbitrage:
  min_spread_percent: 0.5
"#;
        let result = load_config_from_str(duplicate);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Duplicate exchange id"));
    }

    #[test]
    fn test_load_config_missing_section() {
        let result = load_config_from_str("exchanges: []\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_load_config_from_file_valid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(VALID_CONFIG_YAML.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.exchanges.len(), 2);
        assert_eq!(config.exchanges[1].id.as_str(), "bybit");
    }

    #[test]
    fn test_load_config_from_file_invalid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"invalid: [yaml: content").unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }

    #[test]
    #[serial]
    fn test_config_path_defaults_without_env() {
        std::env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(config_path_from_env(), PathBuf::from("config.yaml"));

        std::env::set_var(CONFIG_PATH_ENV, "  ");
        assert_eq!(config_path_from_env(), PathBuf::from("config.yaml"));
        std::env::remove_var(CONFIG_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        std::env::set_var(CONFIG_PATH_ENV, "/etc/basis_scan/prod.yaml");
        assert_eq!(config_path_from_env(), PathBuf::from("/etc/basis_scan/prod.yaml"));
        std::env::remove_var(CONFIG_PATH_ENV);
    }

    #[test]
    fn test_file_parse_error_names_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"exchanges: [").unwrap();
        temp_file.flush().unwrap();

        let msg = load_config(temp_file.path()).unwrap_err().to_string();
        assert!(msg.contains(&temp_file.path().display().to_string()), "Got: {}", msg);
    }
}
