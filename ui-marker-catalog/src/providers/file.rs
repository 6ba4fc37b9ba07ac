//! Catalog read from a local JSON document
//!
//! Same lookups the web backend performs against its configuration file,
//! without the web backend.

use std::path::Path;

use async_trait::async_trait;

use crate::error::{CatalogError, Result};
use crate::traits::CatalogProvider;
use crate::types::{ApplicationRecord, CatalogDocument, CatalogEntry};

use super::common::require_param;

const CATALOG_NAME: &str = "file";

/// In-memory catalog loaded from a [`CatalogDocument`].
#[derive(Debug, Clone)]
pub struct FileCatalog {
    document: CatalogDocument,
}

impl FileCatalog {
    pub fn from_document(document: CatalogDocument) -> Self {
        Self { document }
    }

    /// Read and parse the document at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("[{CATALOG_NAME}] Loading catalog from {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Io {
                catalog: CATALOG_NAME.to_string(),
                detail: format!("{}: {e}", path.display()),
            })?;

        let document: CatalogDocument =
            serde_json::from_str(&content).map_err(|e| CatalogError::MalformedResponse {
                catalog: CATALOG_NAME.to_string(),
                detail: format!("{}: {e}", path.display()),
            })?;

        log::info!(
            "[{CATALOG_NAME}] Loaded {} application(s) from {}",
            document.applications.len(),
            path.display()
        );
        Ok(Self { document })
    }

    fn application(&self, application_id: &str) -> Result<&ApplicationRecord> {
        self.document
            .applications
            .iter()
            .find(|a| a.id == application_id)
            .ok_or_else(|| CatalogError::NotFound {
                catalog: CATALOG_NAME.to_string(),
                entry: "application".to_string(),
                id: application_id.to_string(),
            })
    }
}

#[async_trait]
impl CatalogProvider for FileCatalog {
    fn id(&self) -> &'static str {
        CATALOG_NAME
    }

    async fn list_applications(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self
            .document
            .applications
            .iter()
            .map(ApplicationRecord::entry)
            .collect())
    }

    async fn list_modules(&self, application_id: &str) -> Result<Vec<CatalogEntry>> {
        require_param(CATALOG_NAME, "application_id", application_id)?;
        let application = self.application(application_id)?;
        Ok(application.modules.iter().map(|m| m.entry()).collect())
    }

    async fn list_functions(
        &self,
        application_id: &str,
        module_id: &str,
    ) -> Result<Vec<CatalogEntry>> {
        require_param(CATALOG_NAME, "application_id", application_id)?;
        require_param(CATALOG_NAME, "module_id", module_id)?;
        let module = self
            .application(application_id)?
            .modules
            .iter()
            .find(|m| m.id == module_id)
            .ok_or_else(|| CatalogError::NotFound {
                catalog: CATALOG_NAME.to_string(),
                entry: "module".to_string(),
                id: module_id.to_string(),
            })?;
        Ok(module.functions.clone())
    }
}
