pub mod toml_config;

use crate::domain::model::RunConfiguration;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use toml_config::validate_log_level;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

pub const DEFAULT_PORT: u16 = 8080;

/// Everything one status report needs, after CLI flags and the settings file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub run: RunConfiguration,
    pub catalog_path: Option<String>,
    pub strict_paths: bool,
    pub log_level: Option<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            run: RunConfiguration::new(DEFAULT_PORT, false),
            catalog_path: None,
            strict_paths: false,
            log_level: None,
        }
    }
}

impl Validate for ReportSettings {
    fn validate(&self) -> Result<()> {
        self.run.validate()?;
        if let Some(path) = &self.catalog_path {
            validate_path("catalog.path", path)?;
        }
        if let Some(level) = &self.log_level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "runtime-status")]
#[command(about = "Print the local URL of every runtime component")]
pub struct CliConfig {
    /// HTTP port the runtime was started on
    #[arg(long)]
    pub port: Option<u16>,

    /// Runtime is running in containers; every component is on the fixed container port
    #[arg(long, alias = "container-mode")]
    pub docker: bool,

    /// Endpoint catalog file (TOML or JSON); the built-in catalog is used otherwise
    #[arg(long)]
    pub catalog: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Reject malformed endpoint paths instead of printing them as-is
    #[arg(long)]
    pub strict_paths: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定：命令列 > 設定檔 > 預設值
    pub fn merge(&self, file: Option<&TomlConfig>) -> ReportSettings {
        let defaults = ReportSettings::default();

        let port = self
            .port
            .or_else(|| file.and_then(|f| f.port()))
            .unwrap_or(defaults.run.port);
        let container_mode = self.docker || file.and_then(|f| f.container_mode()).unwrap_or(false);

        ReportSettings {
            run: RunConfiguration::new(port, container_mode),
            catalog_path: self
                .catalog
                .clone()
                .or_else(|| file.and_then(|f| f.catalog_path().map(str::to_string))),
            strict_paths: self.strict_paths
                || file.and_then(|f| f.strict_paths()).unwrap_or(false),
            log_level: file.and_then(|f| f.log_level().map(str::to_string)),
        }
    }
}
