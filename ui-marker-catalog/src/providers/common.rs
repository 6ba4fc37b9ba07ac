//! Catalog 公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::error::{CatalogError, Result};

// ============ HTTP Client ============

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(
    catalog_name: &str,
    connect_timeout_secs: u64,
    request_timeout_secs: u64,
) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(request_timeout_secs))
        .build()
        .map_err(|e| CatalogError::NetworkError {
            catalog: catalog_name.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ 参数校验 ============

/// Reject an empty identifier before any lookup happens.
pub fn require_param(catalog_name: &str, param: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidParameter {
            catalog: catalog_name.to_string(),
            param: param.to_string(),
            detail: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_param_rejects_blank() {
        let err = require_param("file", "module_id", "  ").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidParameter { ref param, .. } if param == "module_id"
        ));
    }

    #[test]
    fn require_param_accepts_value() {
        assert!(require_param("file", "application_id", "APP1").is_ok());
    }
}
