use crate::core::renderer;
use crate::core::resolver;
use crate::domain::model::RunConfiguration;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;

/// Produces the status report for one run configuration.
pub struct StatusReporter<S: CatalogSource> {
    source: S,
    strict_paths: bool,
}

impl<S: CatalogSource> StatusReporter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            strict_paths: false,
        }
    }

    /// Reject malformed path templates instead of printing them as-is.
    pub fn with_strict_paths(mut self, strict: bool) -> Self {
        self.strict_paths = strict;
        self
    }

    /// Loads the catalog, resolves and writes the report. Returns the line count.
    pub async fn report<W: Write>(&self, config: &RunConfiguration, writer: &mut W) -> Result<usize> {
        tracing::debug!("Loading endpoint catalog from {}", self.source.describe());
        let catalog = self.source.load().await?;
        tracing::debug!("Catalog contains {} endpoints", catalog.len());

        if self.strict_paths {
            catalog.validate()?;
        }

        if catalog.is_empty() {
            tracing::warn!("Endpoint catalog {} is empty", self.source.describe());
        }

        let port = resolver::resolve_effective_port(config);
        tracing::info!(
            "Resolving endpoints on port {} (container mode: {})",
            port,
            config.container_mode
        );
        let endpoints = resolver::resolve_with_port(port, &catalog);

        let written = renderer::render(writer, &endpoints)?;
        tracing::debug!("Wrote {} status lines", written);

        Ok(written)
    }
}
