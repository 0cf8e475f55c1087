use crate::domain::model::{Catalog, CatalogEntry, ResolvedEndpoint, RunConfiguration};

/// Port every component is published on when running in container mode.
pub const CONTAINER_PORT: u16 = 8080;

pub fn resolve_effective_port(config: &RunConfiguration) -> u16 {
    if config.container_mode {
        CONTAINER_PORT
    } else {
        config.port
    }
}

pub fn build_url(effective_port: u16, entry: &CatalogEntry) -> String {
    format!("http://localhost:{}{}", effective_port, entry.path)
}

/// Resolves every catalog entry against one effective port, in catalog order.
pub fn resolve(config: &RunConfiguration, catalog: &Catalog) -> Vec<ResolvedEndpoint> {
    resolve_with_port(resolve_effective_port(config), catalog)
}

/// Resolves every catalog entry against an already computed effective port.
pub fn resolve_with_port(port: u16, catalog: &Catalog) -> Vec<ResolvedEndpoint> {
    catalog
        .iter()
        .map(|entry| ResolvedEndpoint {
            label: entry.label.clone(),
            url: build_url(port, entry),
        })
        .collect()
}
