#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::app::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective settings: command line flags over the TOML file over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: String,
    pub log_level: String,
    pub json_logs: bool,
    pub verbose: bool,
    pub format: OutputFormat,
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        Self {
            data_file: file.data_file().to_string(),
            log_level: file.log_level().to_string(),
            json_logs: file.json_logs(),
            verbose: false,
            format: file.output.format,
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let mut settings = Self::from_toml(&file);
        if let Some(data_file) = &cli.data_file {
            settings.data_file = data_file.clone();
        }
        if let Some(format) = cli.format {
            settings.format = format;
        }
        settings.json_logs |= cli.json_logs;
        settings.verbose = cli.verbose;
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn log_level(&self) -> &str {
        &self.log_level
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("data_file", &self.data_file)
    }
}
