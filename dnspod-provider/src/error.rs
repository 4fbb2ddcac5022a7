use serde::{Deserialize, Serialize};

use crate::types::Record;

/// Unified error type for all DNSPod record operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Transport Errors
///
/// [`NetworkError`](Self::NetworkError), [`HttpError`](Self::HttpError) and
/// [`Timeout`](Self::Timeout) describe a failure to exchange a request with the API at all.
/// None of them is retried: a single failure aborts the whole operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-2xx HTTP status.
    HttpError {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Response body (truncated).
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API reported a logical failure through its status envelope
    /// (bad credentials, rate limiting, invalid parameters, ...).
    ApiError {
        /// Provider that produced the error.
        provider: String,
        /// Status code from the response envelope.
        raw_code: String,
        /// Status message from the response envelope.
        raw_message: String,
    },

    /// No domain in the account matches the requested zone.
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone name that was looked up (without trailing dot).
        domain: String,
    },

    /// No existing record matches the record an operation expected to find.
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Fully-qualified record name.
        name: String,
        /// Record type tag.
        record_type: String,
        /// Record data.
        data: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The provider could not be constructed from the given configuration.
    InvalidConfig {
        /// Provider that produced the error.
        provider: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ProviderError {
    /// Whether the request never produced a usable API response
    /// (network failure, timeout or non-2xx status).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::HttpError { .. } | Self::Timeout { .. }
        )
    }

    /// Whether the failure is caused by the caller's input or account state, used for
    /// log levels.
    ///
    /// Returns `true` when `warn` is appropriate, `false` for `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ApiError { .. }
                | Self::DomainNotFound { .. }
                | Self::RecordNotFound { .. }
                | Self::InvalidConfig { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::HttpError {
                provider,
                status,
                detail,
            } => {
                if detail.is_empty() {
                    write!(f, "[{provider}] HTTP error: {status}")
                } else {
                    write!(f, "[{provider}] HTTP error: {status} {detail}")
                }
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::ApiError {
                provider,
                raw_code,
                raw_message,
            } => {
                write!(f, "[{provider}] API error: {raw_code} - {raw_message}")
            }
            Self::DomainNotFound { provider, domain } => {
                write!(f, "[{provider}] Domain '{domain}' not found in account")
            }
            Self::RecordNotFound {
                provider,
                name,
                record_type,
                data,
            } => {
                write!(f, "[{provider}] Record not found: {name} {record_type} {data}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::InvalidConfig { provider, detail } => {
                write!(f, "[{provider}] Invalid configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Failure of a multi-record operation.
///
/// Records are processed one by one and nothing is rolled back, so the records handled
/// before the failure are returned alongside the error.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{source} ({} record(s) completed before the failure)", .completed.len())]
pub struct BatchError {
    /// Records that were processed successfully, in input order.
    pub completed: Vec<Record>,
    /// The error that stopped the batch.
    #[source]
    pub source: ProviderError,
}

impl BatchError {
    pub fn new(completed: Vec<Record>, source: ProviderError) -> Self {
        Self { completed, source }
    }
}

impl From<ProviderError> for BatchError {
    fn from(source: ProviderError) -> Self {
        Self::new(Vec::new(), source)
    }
}

/// Result of a multi-record operation.
pub type BatchResult = std::result::Result<Vec<Record>, BatchError>;
