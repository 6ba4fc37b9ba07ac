use serde::{Deserialize, Serialize};

/// Unified error type for all catalog operations.
///
/// Each variant includes a `catalog` field identifying which source produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — endpoint rate limit exceeded
///
/// The HTTP catalog automatically retries these with exponential backoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum CatalogError {
    /// A network-level error occurred (connection refused, reset, gateway errors).
    NetworkError {
        /// Catalog that produced the error.
        catalog: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Catalog that produced the error.
        catalog: String,
        /// Error details.
        detail: String,
    },

    /// The endpoint answered HTTP 429.
    RateLimited {
        /// Catalog that produced the error.
        catalog: String,
        /// Suggested wait time in seconds, if the server sent `Retry-After`.
        retry_after: Option<u64>,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The endpoint answered with a non-success status that is not retried.
    HttpStatus {
        /// Catalog that produced the error.
        catalog: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The response body could not be read as the expected record list
    /// (invalid JSON, missing `modules` / `functions` array, bad record shape).
    MalformedResponse {
        /// Catalog that produced the error.
        catalog: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A request parameter is invalid (e.g. an empty application id).
    InvalidParameter {
        /// Catalog that produced the error.
        catalog: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The requested application or module does not exist in the catalog.
    NotFound {
        /// Catalog that produced the error.
        catalog: String,
        /// What kind of entry was looked up (`application`, `module`).
        entry: String,
        /// Identifier that was not found.
        id: String,
    },

    /// Reading the catalog source failed.
    Io {
        /// Catalog that produced the error.
        catalog: String,
        /// Error details.
        detail: String,
    },
}

impl CatalogError {
    /// Whether the failure is transient and worth retrying.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::NotFound { .. } | Self::RateLimited { .. }
        )
    }

    /// Name of the catalog source that produced the error.
    #[must_use]
    pub fn catalog(&self) -> &str {
        match self {
            Self::NetworkError { catalog, .. }
            | Self::Timeout { catalog, .. }
            | Self::RateLimited { catalog, .. }
            | Self::HttpStatus { catalog, .. }
            | Self::MalformedResponse { catalog, .. }
            | Self::InvalidParameter { catalog, .. }
            | Self::NotFound { catalog, .. }
            | Self::Io { catalog, .. } => catalog,
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { catalog, detail } => {
                write!(f, "[{catalog}] Network error: {detail}")
            }
            Self::Timeout { catalog, detail } => {
                write!(f, "[{catalog}] Request timeout: {detail}")
            }
            Self::RateLimited {
                catalog,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{catalog}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{catalog}] Rate limited")
                }
            }
            Self::HttpStatus {
                catalog,
                status,
                raw_message,
            } => match raw_message {
                Some(msg) if !msg.is_empty() => {
                    write!(f, "[{catalog}] HTTP {status}: {msg}")
                }
                _ => write!(f, "[{catalog}] HTTP {status}"),
            },
            Self::MalformedResponse { catalog, detail } => {
                write!(f, "[{catalog}] Malformed response: {detail}")
            }
            Self::InvalidParameter {
                catalog,
                param,
                detail,
            } => {
                write!(f, "[{catalog}] Invalid parameter '{param}': {detail}")
            }
            Self::NotFound { catalog, entry, id } => {
                write!(f, "[{catalog}] Unknown {entry} '{id}'")
            }
            Self::Io { catalog, detail } => {
                write!(f, "[{catalog}] I/O error: {detail}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Convenience type alias for `Result<T, CatalogError>`.
pub type Result<T> = std::result::Result<T, CatalogError>;
