use crate::utils::error::{Result, StatusError};
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Optional settings file. Every section and key may be omitted.
/// Values are validated only after merging with the command line (see `ReportSettings`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub run: Option<RunSection>,
    pub catalog: Option<CatalogSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSection {
    pub port: Option<u16>,
    pub container_mode: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    pub path: Option<String>,
    pub strict_paths: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入設定；相對的 catalog 路徑以設定檔所在目錄為基準
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(base) = path.as_ref().parent() {
            config.anchor_catalog_path(base);
        }

        Ok(config)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${RUNTIME_PORT})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatusError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn anchor_catalog_path(&mut self, base: &Path) {
        let Some(path) = self.catalog.as_mut().and_then(|c| c.path.as_mut()) else {
            return;
        };

        if !path.is_empty() && Path::new(path.as_str()).is_relative() {
            *path = base.join(path.as_str()).display().to_string();
        }
    }

    pub fn port(&self) -> Option<u16> {
        self.run.as_ref().and_then(|r| r.port)
    }

    pub fn container_mode(&self) -> Option<bool> {
        self.run.as_ref().and_then(|r| r.container_mode)
    }

    pub fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_ref().and_then(|c| c.path.as_deref())
    }

    pub fn strict_paths(&self) -> Option<bool> {
        self.catalog.as_ref().and_then(|c| c.strict_paths)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    validate_non_empty_string(field_name, level)?;
    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(StatusError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unsupported log level. Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[run]
port = 9090
container_mode = true

[catalog]
path = "/etc/runtime/endpoints.toml"
strict_paths = true

[logging]
level = "info"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.port(), Some(9090));
        assert_eq!(config.container_mode(), Some(true));
        assert_eq!(config.catalog_path(), Some("/etc/runtime/endpoints.toml"));
        assert_eq!(config.strict_paths(), Some(true));
        assert_eq!(config.log_level(), Some("info"));
    }

    #[test]
    fn test_all_sections_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.port(), None);
        assert_eq!(config.container_mode(), None);
        assert_eq!(config.catalog_path(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RUNTIME_STATUS_TEST_PORT", "9191");

        let config = TomlConfig::from_toml_str("[run]\nport = ${RUNTIME_STATUS_TEST_PORT}\n").unwrap();
        assert_eq!(config.port(), Some(9191));

        std::env::remove_var("RUNTIME_STATUS_TEST_PORT");
    }

    #[test]
    fn test_unknown_env_var_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            "[catalog]\npath = \"${RUNTIME_STATUS_UNSET_VAR}/endpoints.toml\"\n",
        )
        .unwrap();
        assert_eq!(
            config.catalog_path(),
            Some("${RUNTIME_STATUS_UNSET_VAR}/endpoints.toml")
        );
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("logging.level", "info").is_ok());
        assert!(validate_log_level("logging.level", "WARN").is_ok());
        assert!(validate_log_level("logging.level", "loud").is_err());
        assert!(validate_log_level("logging.level", " ").is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[run\nport = 1").unwrap_err();
        assert!(matches!(err, StatusError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file_anchors_catalog_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\npath = \"endpoints.toml\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let expected = temp_file
            .path()
            .parent()
            .unwrap()
            .join("endpoints.toml")
            .display()
            .to_string();
        assert_eq!(config.catalog_path(), Some(expected.as_str()));
    }
}
