use serde::{Deserialize, Serialize};

/// Unified error type for all record provider operations.
///
/// Each variant includes a `provider` field identifying which backend produced the error,
/// plus variant-specific context. All variants are serializable so the host can report
/// them as structured payloads.
///
/// # Request-level failures
///
/// [`Collision`](Self::Collision), [`NotFound`](Self::NotFound) and
/// [`ZoneNotFound`](Self::ZoneNotFound) describe the state of the hosted zones, not a
/// fault of the provider. Nothing is retried internally: every variant surfaces to the
/// immediate caller, which decides how to report it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// Required settings are missing or invalid. Raised at construction time.
    ConfigurationError {
        /// Provider that produced the error.
        provider: String,
        /// Name of the offending setting.
        field: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// No hosted zone covers the requested name.
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Fully qualified name that could not be placed in a zone.
        name: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The name already resolves to a different value than the one being created.
    Collision {
        /// Provider that produced the error.
        provider: String,
        /// Name (or address) of the conflicting record.
        record_name: String,
        /// Value currently bound to the name.
        existing: String,
    },

    /// No record with the requested name (and type) exists in the resolved zone.
    NotFound {
        /// Provider that produced the error.
        provider: String,
        /// Name of the record that was not found.
        record_name: String,
        /// Type filter used for the lookup, if any.
        record_type: Option<String>,
    },

    /// The remote API rejected a create or delete.
    ///
    /// Carries the remote error payload verbatim.
    RemoteApiError {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error payload from the API.
        raw_message: String,
    },

    /// The provided credentials are invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated user lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API throttled the request.
    ///
    /// Reported as-is; the provider does not retry.
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter is invalid (e.g., zero TTL, malformed IP address).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The requested DNS record type is not supported by this provider.
    UnsupportedRecordType {
        /// Provider that produced the error.
        provider: String,
        /// The unsupported record type string.
        record_type: String,
    },

    /// A network-level error occurred (connection refused, TLS failure, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError { .. }
                | Self::ZoneNotFound { .. }
                | Self::Collision { .. }
                | Self::NotFound { .. }
                | Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedRecordType { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigurationError {
                provider,
                field,
                detail,
            } => {
                write!(f, "[{provider}] Configuration error '{field}': {detail}")
            }
            Self::ZoneNotFound {
                provider,
                name,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] No hosted zone found for '{name}': {msg}")
                } else {
                    write!(f, "[{provider}] No hosted zone found for '{name}'")
                }
            }
            Self::Collision {
                provider,
                record_name,
                existing,
            } => {
                write!(f, "[{provider}] '{record_name}' is already used by {existing}")
            }
            Self::NotFound {
                provider,
                record_name,
                record_type,
            } => {
                if let Some(t) = record_type {
                    write!(f, "[{provider}] Could not find {t} record '{record_name}'")
                } else {
                    write!(f, "[{provider}] Could not find record '{record_name}'")
                }
            }
            Self::RemoteApiError {
                provider,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{provider}] API response error {code}: {raw_message}")
                } else {
                    write!(f, "[{provider}] API response error: {raw_message}")
                }
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::RateLimited { provider, .. } => {
                write!(f, "[{provider}] Rate limited")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::UnsupportedRecordType {
                provider,
                record_type,
            } => {
                write!(f, "[{provider}] Unsupported record type: {record_type}")
            }
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
