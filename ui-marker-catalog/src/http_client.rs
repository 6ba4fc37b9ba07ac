//! Shared HTTP request handling for catalog endpoints
//!
//! One place that sends a request, logs it, classifies the status code and
//! reads the body, so that endpoint methods only build the request and pick
//! the response type.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::CatalogError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP helper functions
pub struct HttpUtils;

impl HttpUtils {
    /// Performs a request and returns the body of a 2xx response.
    ///
    /// # Returns
    /// * `Ok(body)` on any 2xx status
    /// * `Err(CatalogError::Timeout | NetworkError)` on transport failure
    /// * `Err(CatalogError::RateLimited)` on HTTP 429
    /// * `Err(CatalogError::NetworkError)` on HTTP 502/503/504
    /// * `Err(CatalogError::HttpStatus)` on every other non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        catalog_name: &str,
        url: &str,
    ) -> Result<String, CatalogError> {
        log::debug!("[{catalog_name}] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout {
                    catalog: catalog_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                CatalogError::NetworkError {
                    catalog: catalog_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{catalog_name}] Response Status: {status_code}");

        // Read before the body is consumed.
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{catalog_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(CatalogError::RateLimited {
                catalog: catalog_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{catalog_name}] Gateway error (HTTP {status_code})");
            return Err(CatalogError::NetworkError {
                catalog: catalog_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!(
                "[{catalog_name}] Error Body: {}",
                truncate_for_log(&body)
            );
            return Err(CatalogError::HttpStatus {
                catalog: catalog_name.to_string(),
                status: status_code,
                raw_message: Some(body),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| CatalogError::NetworkError {
                catalog: catalog_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{catalog_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse a JSON body into `T`.
    ///
    /// Any mismatch, including a missing list field, is a
    /// [`CatalogError::MalformedResponse`].
    pub fn parse_json<T>(response_text: &str, catalog_name: &str) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{catalog_name}] JSON parse failed: {e}");
            log::error!(
                "[{catalog_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            CatalogError::MalformedResponse {
                catalog: catalog_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// [`execute_request`](Self::execute_request) with retries.
    ///
    /// Only transient errors (see [`CatalogError::is_retryable`]) are retried.
    /// Delay is exponential (100ms, 200ms, 400ms, ... capped at 10s) unless the
    /// server sent `Retry-After`, which is honoured up to 30s.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        catalog_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<String, CatalogError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, catalog_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single use.
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{catalog_name}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, catalog_name, url).await;
            };

            match Self::execute_request(req, catalog_name, url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        catalog_name,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| CatalogError::NetworkError {
            catalog: catalog_name.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Delay before the next attempt.
fn retry_delay(error: &CatalogError, attempt: u32) -> Duration {
    if let CatalogError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms * 2^attempt, capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
