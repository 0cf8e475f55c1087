use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog error ({source_name}): {message}")]
    CatalogError {
        source_name: String,
        message: String,
    },

    // 不使用 #[from]：輸出失敗必須與一般 IO 錯誤分開
    #[error("Failed to write status report: {0}")]
    OutputError(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StatusError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatusError::ConfigError { .. }
            | StatusError::InvalidConfigValueError { .. }
            | StatusError::TomlError(_) => ErrorCategory::Configuration,
            StatusError::CatalogError { .. } => ErrorCategory::Catalog,
            StatusError::OutputError(_) => ErrorCategory::Output,
            StatusError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 下游關閉管道 (例如 `| head`) 不算失敗
            StatusError::OutputError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            StatusError::OutputError(_) => ErrorSeverity::Medium,
            StatusError::ConfigError { .. }
            | StatusError::InvalidConfigValueError { .. }
            | StatusError::CatalogError { .. }
            | StatusError::TomlError(_) => ErrorSeverity::High,
            StatusError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags and the [run] section of the settings file".to_string()
            }
            ErrorCategory::Catalog => {
                "Make sure the endpoint catalog is valid TOML or JSON with [[endpoint]] entries"
                    .to_string()
            }
            ErrorCategory::Output => {
                "Make sure standard output is writable (not a closed pipe or full disk)".to_string()
            }
            ErrorCategory::System => {
                "Check that the referenced files exist and are readable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatusError::IoError(e) => format!("Could not read an input file: {}", e),
            StatusError::TomlError(e) => format!("Settings file is not valid TOML: {}", e),
            StatusError::ConfigError { message } => format!("Invalid configuration: {}", message),
            StatusError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has invalid value '{}': {}", field, value, reason),
            StatusError::CatalogError {
                source_name,
                message,
            } => format!("Endpoint catalog '{}' could not be used: {}", source_name, message),
            StatusError::OutputError(e) => format!("Status report was not fully written: {}", e),
        }
    }

    /// 依嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatusError>;
