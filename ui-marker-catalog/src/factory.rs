//! Catalog factory.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::{FileCatalog, HttpCatalog};
use crate::traits::CatalogProvider;
use crate::types::CatalogConfig;

/// Creates a [`CatalogProvider`] from its configuration.
///
/// The file variant reads and parses the document up front, so a broken
/// catalog file is reported at startup rather than on the first change event.
///
/// # Examples
///
/// ```rust,no_run
/// use ui_marker_catalog::{create_catalog, CatalogConfig};
///
/// # async fn example() -> ui_marker_catalog::Result<()> {
/// let catalog = create_catalog(&CatalogConfig::http("http://127.0.0.1:5000")).await?;
/// let applications = catalog.list_applications().await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_catalog(config: &CatalogConfig) -> Result<Arc<dyn CatalogProvider>> {
    match config {
        CatalogConfig::Http { .. } => Ok(Arc::new(HttpCatalog::from_config(config)?)),
        CatalogConfig::File { path } => Ok(Arc::new(FileCatalog::load(path).await?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn http_config_builds_http_catalog() {
        let catalog = create_catalog(&CatalogConfig::default()).await.unwrap();
        assert_eq!(catalog.id(), "http");
    }

    #[tokio::test]
    async fn missing_file_fails_at_creation() {
        let config = CatalogConfig::File {
            path: "/nonexistent/catalog.json".into(),
        };
        assert!(create_catalog(&config).await.is_err());
    }
}
