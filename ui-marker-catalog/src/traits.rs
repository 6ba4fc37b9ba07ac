use async_trait::async_trait;

use crate::error::Result;
use crate::types::CatalogEntry;

/// Source of the three linked option lists.
///
/// Every list is returned in source order. Implementations must not sort,
/// dedupe or otherwise reshape what the source provides.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Short source name, used in logs and error values.
    fn id(&self) -> &'static str;

    /// All applications (root options of the form).
    async fn list_applications(&self) -> Result<Vec<CatalogEntry>>;

    /// Modules belonging to `application_id`.
    async fn list_modules(&self, application_id: &str) -> Result<Vec<CatalogEntry>>;

    /// Functions belonging to `module_id` inside `application_id`.
    ///
    /// Module ids are only unique within their application, so both are required.
    async fn list_functions(
        &self,
        application_id: &str,
        module_id: &str,
    ) -> Result<Vec<CatalogEntry>>;
}
