//! # ui-marker-catalog
//!
//! Data sources for the three linked selections of the UI marker search form:
//! applications, the modules of an application, and the functions of a module.
//!
//! ## Sources
//!
//! | Source | Config `kind` | Backing |
//! |--------|---------------|---------|
//! | [`HttpCatalog`] | `http` | `GET` on the form's web backend |
//! | [`FileCatalog`] | `file` | Local JSON catalog document |
//!
//! ## Endpoints
//!
//! | Endpoint | Query | Body |
//! |----------|-------|------|
//! | `/ui_marker/applications` | — | `[{ id, name, ... }]` |
//! | `/ui_marker/get_modules_by_application` | `application_id` | `{ modules: [{ id, name }] }` |
//! | `/ui_marker/get_functions_by_module` | `application_id`, `module_id` | `{ functions: [{ id, name }] }` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ui_marker_catalog::{create_catalog, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = create_catalog(&CatalogConfig::http("http://127.0.0.1:5000")).await?;
//!
//!     for module in catalog.list_modules("APP1").await? {
//!         println!("{} ({})", module.name, module.id);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, CatalogError>`](CatalogError).
//! A body without the expected `modules` / `functions` array is reported as
//! [`CatalogError::MalformedResponse`]; transport failures as
//! [`CatalogError::NetworkError`] or [`CatalogError::Timeout`]. Transient
//! errors are retried with exponential backoff by the HTTP source.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{CatalogError, Result};
pub use factory::create_catalog;
pub use providers::{FileCatalog, HttpCatalog};
pub use traits::CatalogProvider;
pub use types::{
    ApplicationRecord, CatalogConfig, CatalogDocument, CatalogEntry, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS, EndpointPaths, FunctionsResponse,
    ModuleRecord, ModulesResponse,
};
