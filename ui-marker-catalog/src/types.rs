use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

// ============ Records ============

/// One selectable record: an identifier and its display name.
///
/// Identifiers are always strings on this side of the wire. Endpoints that
/// emit numeric ids are accepted and the number is rendered in decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Identifier submitted as the option value.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Human readable label.
    pub name: String,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Body of the modules-by-application endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesResponse {
    pub modules: Vec<CatalogEntry>,
}

/// Body of the functions-by-module endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionsResponse {
    pub functions: Vec<CatalogEntry>,
}

// ============ Catalog document ============

/// Full application → module → function tree, as kept in the server-side
/// configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub applications: Vec<ApplicationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub modules: Vec<ModuleRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub functions: Vec<CatalogEntry>,
}

impl ApplicationRecord {
    /// The (id, name) pair without the nested modules.
    pub fn entry(&self) -> CatalogEntry {
        CatalogEntry::new(self.id.clone(), self.name.clone())
    }
}

impl ModuleRecord {
    pub fn entry(&self) -> CatalogEntry {
        CatalogEntry::new(self.id.clone(), self.name.clone())
    }
}

// ============ Configuration ============

/// Endpoint paths, relative to the catalog base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointPaths {
    pub applications: String,
    pub modules: String,
    pub functions: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            applications: "/ui_marker/applications".to_string(),
            modules: "/ui_marker/get_modules_by_application".to_string(),
            functions: "/ui_marker/get_functions_by_module".to_string(),
        }
    }
}

/// Default connect timeout (seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default number of retries for transient failures.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Where the catalog comes from.
///
/// # Examples
///
/// ```json
/// { "kind": "http", "baseUrl": "http://127.0.0.1:5000" }
/// { "kind": "file", "path": "conf/ui_marker.json" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CatalogConfig {
    #[serde(rename_all = "camelCase")]
    Http {
        base_url: String,
        #[serde(default)]
        endpoints: EndpointPaths,
        #[serde(default = "default_connect_timeout")]
        connect_timeout_secs: u64,
        #[serde(default = "default_request_timeout")]
        request_timeout_secs: u64,
        #[serde(default = "default_max_retries")]
        max_retries: u32,
    },
    File { path: PathBuf },
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

impl CatalogConfig {
    /// HTTP catalog with default endpoints, timeouts and retries.
    pub fn http(base_url: impl Into<String>) -> Self {
        Self::Http {
            base_url: base_url.into(),
            endpoints: EndpointPaths::default(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::http("http://127.0.0.1:5000")
    }
}
