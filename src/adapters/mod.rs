// Adapters layer: concrete catalog sources behind the CatalogSource port.

pub mod catalog;

pub use catalog::{BuiltinCatalog, FileCatalog, StaticCatalog};
