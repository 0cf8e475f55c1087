use crate::domain::model::{Catalog, RunConfiguration};
use crate::utils::error::{Result, StatusError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(StatusError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: port.to_string(),
            reason: "Port must be between 1 and 65535".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StatusError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StatusError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StatusError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects values that would not fit on one report line.
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.chars().any(char::is_control) {
        return Err(StatusError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_debug().to_string(),
            reason: "Value cannot contain control characters".to_string(),
        });
    }
    Ok(())
}

/// Rejects path templates that would not produce a usable URL.
pub fn validate_path_template(field_name: &str, template: &str) -> Result<()> {
    let invalid = |reason: &str| StatusError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: template.to_string(),
        reason: reason.to_string(),
    };

    if template.is_empty() {
        return Err(invalid("Path template cannot be empty"));
    }
    if !template.starts_with('/') {
        return Err(invalid("Path template must start with '/'"));
    }
    if template.chars().any(char::is_control) {
        return Err(invalid("Path template cannot contain control characters"));
    }
    if template.chars().any(char::is_whitespace) {
        return Err(invalid("Path template cannot contain whitespace"));
    }

    // 以固定埠號組出完整 URL 確認可解析
    let candidate = format!("http://localhost:8080{}", template);
    Url::parse(&candidate)
        .map(|_| ())
        .map_err(|e| invalid(&format!("Invalid URL path: {}", e)))
}

pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    for (index, entry) in catalog.iter().enumerate() {
        let label_field = format!("endpoint[{}].label", index);
        validate_non_empty_string(&label_field, &entry.label)?;
        validate_single_line(&label_field, &entry.label)?;
        validate_path_template(&format!("endpoint[{}].path", index), &entry.path)?;
    }
    Ok(())
}

impl Validate for RunConfiguration {
    fn validate(&self) -> Result<()> {
        // 容器模式下一律使用固定埠號，port 不影響輸出
        if !self.container_mode {
            validate_port("run.port", self.port)?;
        }
        Ok(())
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        validate_catalog(self)
    }
}
