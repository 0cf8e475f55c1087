use crate::domain::model::Catalog;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{Result, StatusError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

const BUILTIN_ENDPOINTS: &str = include_str!("../../endpoints.toml");

/// Parses catalog text as JSON or TOML.
pub fn parse_catalog(source_name: &str, content: &str, is_json: bool) -> Result<Catalog> {
    let parsed = if is_json {
        serde_json::from_str::<Catalog>(content).map_err(|e| e.to_string())
    } else {
        toml::from_str::<Catalog>(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| StatusError::CatalogError {
        source_name: source_name.to_string(),
        message,
    })
}

/// Catalog shipped with the binary.
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn load(&self) -> Result<Catalog> {
        parse_catalog("builtin", BUILTIN_ENDPOINTS, false)
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<Catalog> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        parse_catalog(&self.path.display().to_string(), &content, self.is_json())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// In-memory catalog, for embedding callers and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} entries)", self.catalog.len())
    }
}
