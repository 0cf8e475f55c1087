use crate::domain::model::Catalog;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the endpoint catalog. Loaded once per report, before resolution.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog>;

    /// Human readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    async fn load(&self) -> Result<Catalog> {
        (**self).load().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
