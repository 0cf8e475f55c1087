pub mod renderer;
pub mod reporter;
pub mod resolver;

pub use crate::domain::model::{Catalog, CatalogEntry, ResolvedEndpoint, RunConfiguration};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
