pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::catalog::{BuiltinCatalog, FileCatalog, StaticCatalog};
pub use config::{toml_config::TomlConfig, ReportSettings};
pub use core::reporter::StatusReporter;
pub use core::resolver::CONTAINER_PORT;
pub use domain::model::{Catalog, CatalogEntry, ResolvedEndpoint, RunConfiguration};
pub use domain::ports::CatalogSource;
pub use utils::error::{Result, StatusError};
