use crate::app::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "./sleigh-data.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn data_file(&self) -> &str {
        &self.store.data_file
    }

    fn log_level(&self) -> &str {
        &self.logging.level
    }

    fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("store.data_file", &self.store.data_file)?;
        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[store]
data_file = "/var/lib/sleigh/data.json"

[logging]
level = "debug"
format = "json"

[output]
format = "csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_file(), "/var/lib/sleigh/data.json");
        assert_eq!(config.log_level(), "debug");
        assert!(config.json_logs());
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.data_file(), DEFAULT_DATA_FILE);
        assert_eq!(config.log_level(), "info");
        assert!(!config.json_logs());
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SLEIGH_TEST_DATA_DIR", "/tmp/sleigh-test");

        let config = TomlConfig::from_toml_str(
            r#"
[store]
data_file = "${SLEIGH_TEST_DATA_DIR}/data.json"
"#,
        )
        .unwrap();
        assert_eq!(config.store.data_file, "/tmp/sleigh-test/data.json");

        std::env::remove_var("SLEIGH_TEST_DATA_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[logging]
level = "loud"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n");
        assert!(bad_format.is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[store]\ndata_file = \"./from-file.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data_file(), "./from-file.json");
    }
}
