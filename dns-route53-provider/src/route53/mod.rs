//! AWS Route 53 hosted-zone API client

mod api;
mod error;
mod http;
mod sign;
/// Route 53 API-specific request/response types.
pub(crate) mod types;

use reqwest::Client;

use crate::PROVIDER_ID;
use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::mask_secret;

/// Route 53 REST API version prefix.
pub(crate) const API_VERSION: &str = "2013-04-01";
/// Signing service name.
pub(crate) const SERVICE: &str = "route53";
/// XML namespace of request bodies.
pub(crate) const XML_NAMESPACE: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

/// Route 53 client implementing [`HostedZoneApi`](crate::HostedZoneApi).
///
/// Authenticates via AWS Signature Version 4.
///
/// # Construction
///
/// ```rust,no_run
/// use dns_route53_provider::{Route53Client, Route53Settings};
///
/// let config = Route53Settings {
///     aws_access_key: Some("your-access-key".to_string()),
///     aws_secret_key: Some("your-secret-key".to_string()),
///     ..Default::default()
/// }
/// .validate()?;
/// let client = Route53Client::new(&config)?;
/// # Ok::<(), dns_route53_provider::ProviderError>(())
/// ```
pub struct Route53Client {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
    pub(crate) endpoint: String,
    pub(crate) host: String,
    pub(crate) region: String,
}

impl Route53Client {
    /// Builds a client for the configured endpoint and credentials.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let url = reqwest::Url::parse(config.endpoint()).map_err(|e| {
            ProviderError::ConfigurationError {
                provider: PROVIDER_ID.to_string(),
                field: "endpoint".to_string(),
                detail: e.to_string(),
            }
        })?;
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(ProviderError::ConfigurationError {
                    provider: PROVIDER_ID.to_string(),
                    field: "endpoint".to_string(),
                    detail: format!("'{}' has no host", config.endpoint()),
                });
            }
        };

        log::debug!(
            "[{PROVIDER_ID}] Connecting to {} as {}",
            config.endpoint(),
            mask_secret(config.access_key())
        );

        Ok(Self {
            client: create_http_client()?,
            access_key_id: config.access_key.clone(),
            secret_access_key: config.secret_key.clone(),
            endpoint: config.endpoint.clone(),
            host,
            region: config.region.clone(),
        })
    }
}

/// 创建 HTTP Client（不设置超时、不重试）
fn create_http_client() -> Result<Client> {
    Client::builder()
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: PROVIDER_ID.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}
