//! Catalog served by the search form's own web backend

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{CatalogError, Result};
use crate::http_client::HttpUtils;
use crate::traits::CatalogProvider;
use crate::types::{
    CatalogConfig, CatalogEntry, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_RETRIES,
    DEFAULT_REQUEST_TIMEOUT_SECS, EndpointPaths, FunctionsResponse, ModulesResponse,
};

use super::common::{create_http_client, require_param};

const CATALOG_NAME: &str = "http";

/// HTTP catalog
///
/// Issues plain GET requests against the three read-only endpoints and reads
/// their JSON bodies.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
    endpoints: EndpointPaths,
    max_retries: u32,
}

impl HttpCatalog {
    /// Catalog rooted at `base_url` with default endpoints and timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_options(
            base_url,
            EndpointPaths::default(),
            DEFAULT_CONNECT_TIMEOUT_SECS,
            DEFAULT_REQUEST_TIMEOUT_SECS,
            DEFAULT_MAX_RETRIES,
        )
    }

    pub fn with_options(
        base_url: impl Into<String>,
        endpoints: EndpointPaths,
        connect_timeout_secs: u64,
        request_timeout_secs: u64,
        max_retries: u32,
    ) -> Result<Self> {
        let base_url = base_url.into();
        // Fail on a bad base URL now rather than on the first change event.
        Url::parse(&base_url).map_err(|e| CatalogError::InvalidParameter {
            catalog: CATALOG_NAME.to_string(),
            param: "base_url".to_string(),
            detail: e.to_string(),
        })?;

        Ok(Self {
            client: create_http_client(CATALOG_NAME, connect_timeout_secs, request_timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints,
            max_retries,
        })
    }

    /// Build from an [`CatalogConfig::Http`] value.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        match config {
            CatalogConfig::Http {
                base_url,
                endpoints,
                connect_timeout_secs,
                request_timeout_secs,
                max_retries,
            } => Self::with_options(
                base_url.clone(),
                endpoints.clone(),
                *connect_timeout_secs,
                *request_timeout_secs,
                *max_retries,
            ),
            CatalogConfig::File { .. } => Err(CatalogError::InvalidParameter {
                catalog: CATALOG_NAME.to_string(),
                param: "kind".to_string(),
                detail: "expected an http catalog configuration".to_string(),
            }),
        }
    }

    /// Absolute URL of `path` with `query` appended.
    fn endpoint_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url)).map_err(|e| {
            CatalogError::InvalidParameter {
                catalog: CATALOG_NAME.to_string(),
                param: "endpoint".to_string(),
                detail: format!("{path}: {e}"),
            }
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// 执行 GET 请求并解析 JSON
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint_url(path, query)?;
        let request = self.client.get(url.clone());
        let body = HttpUtils::execute_request_with_retry(
            request,
            CATALOG_NAME,
            url.as_str(),
            self.max_retries,
        )
        .await?;
        HttpUtils::parse_json(&body, CATALOG_NAME)
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
    fn id(&self) -> &'static str {
        CATALOG_NAME
    }

    async fn list_applications(&self) -> Result<Vec<CatalogEntry>> {
        // Bare array of application objects; nested modules are ignored.
        self.get_json(&self.endpoints.applications, &[]).await
    }

    async fn list_modules(&self, application_id: &str) -> Result<Vec<CatalogEntry>> {
        require_param(CATALOG_NAME, "application_id", application_id)?;
        let response: ModulesResponse = self
            .get_json(
                &self.endpoints.modules,
                &[("application_id", application_id)],
            )
            .await?;
        Ok(response.modules)
    }

    async fn list_functions(
        &self,
        application_id: &str,
        module_id: &str,
    ) -> Result<Vec<CatalogEntry>> {
        require_param(CATALOG_NAME, "application_id", application_id)?;
        require_param(CATALOG_NAME, "module_id", module_id)?;
        let response: FunctionsResponse = self
            .get_json(
                &self.endpoints.functions,
                &[("application_id", application_id), ("module_id", module_id)],
            )
            .await?;
        Ok(response.functions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_keeps_base_path_and_encodes_query() {
        let catalog = HttpCatalog::new("http://example.test/tools/").unwrap();
        let url = catalog
            .endpoint_url(
                "/ui_marker/get_functions_by_module",
                &[("application_id", "APP 1"), ("module_id", "M&1")],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://example.test/tools/ui_marker/get_functions_by_module?application_id=APP+1&module_id=M%261"
        );
    }

    #[test]
    fn invalid_base_url_rejected() {
        let result = HttpCatalog::new("not a url");
        assert!(matches!(
            result,
            Err(CatalogError::InvalidParameter { ref param, .. }) if param == "base_url"
        ));
    }

    #[test]
    fn from_config_rejects_file_kind() {
        let config = CatalogConfig::File {
            path: "catalog.json".into(),
        };
        assert!(HttpCatalog::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn empty_application_id_never_hits_network() {
        // Port 9 (discard) is never contacted: validation fails first.
        let catalog = HttpCatalog::new("http://127.0.0.1:9").unwrap();
        let result = catalog.list_modules("").await;
        assert!(matches!(result, Err(CatalogError::InvalidParameter { .. })));
    }
}
