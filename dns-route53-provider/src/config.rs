//! Provider settings
//!
//! [`Route53Settings`] is what the host loads (from its settings file or the
//! environment); [`ProviderConfig`] is the validated, immutable form the provider
//! keeps for its lifetime.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PROVIDER_ID;
use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::mask_secret;

/// Default record TTL in seconds.
pub const DEFAULT_TTL: u32 = 86_400;
/// Route 53 API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://route53.amazonaws.com";
/// Route 53 is a global service signed against `us-east-1`.
pub const DEFAULT_REGION: &str = "us-east-1";

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

/// Raw provider settings as supplied by the host.
#[derive(Clone, Serialize, Deserialize)]
pub struct Route53Settings {
    pub aws_access_key: Option<String>,
    pub aws_secret_key: Option<String>,
    #[serde(default = "default_ttl")]
    pub dns_ttl: u32,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for Route53Settings {
    fn default() -> Self {
        Self {
            aws_access_key: None,
            aws_secret_key: None,
            dns_ttl: DEFAULT_TTL,
            endpoint: default_endpoint(),
            region: default_region(),
        }
    }
}

impl fmt::Debug for Route53Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route53Settings")
            .field(
                "aws_access_key",
                &self.aws_access_key.as_deref().map(mask_secret),
            )
            .field(
                "aws_secret_key",
                &self.aws_secret_key.as_deref().map(mask_secret),
            )
            .field("dns_ttl", &self.dns_ttl)
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .finish()
    }
}

impl Route53Settings {
    /// Reads settings from `AWS_ACCESS_KEY`, `AWS_SECRET_KEY`, `DNS_TTL` and
    /// `AWS_ROUTE53_ENDPOINT`. Unset values fall back to defaults; validation is
    /// left to [`validate`](Self::validate).
    pub fn from_env() -> Result<Self> {
        let dns_ttl = match env::var("DNS_TTL") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| config_error("dns_ttl", format!("invalid DNS_TTL '{raw}': {e}")))?,
            Err(_) => DEFAULT_TTL,
        };

        Ok(Self {
            aws_access_key: env::var("AWS_ACCESS_KEY").ok(),
            aws_secret_key: env::var("AWS_SECRET_KEY").ok(),
            dns_ttl,
            endpoint: env::var("AWS_ROUTE53_ENDPOINT").unwrap_or_else(|_| default_endpoint()),
            region: default_region(),
        })
    }

    /// Checks presence of both credentials and sanity of the remaining fields.
    pub fn validate(self) -> Result<ProviderConfig> {
        let access_key = required(self.aws_access_key, "aws_access_key")?;
        let secret_key = required(self.aws_secret_key, "aws_secret_key")?;

        if self.dns_ttl == 0 {
            return Err(config_error("dns_ttl", "must be a positive number of seconds"));
        }

        let endpoint = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| config_error("endpoint", format!("'{}': {e}", self.endpoint)))?;
        if endpoint.host_str().is_none() {
            return Err(config_error(
                "endpoint",
                format!("'{}' has no host", self.endpoint),
            ));
        }

        if self.region.trim().is_empty() {
            return Err(config_error("region", "must not be empty"));
        }

        Ok(ProviderConfig {
            access_key,
            secret_key,
            ttl: self.dns_ttl,
            endpoint: self.endpoint.trim_end_matches('/').to_string(),
            region: self.region,
        })
    }
}

/// Validated provider configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub(crate) access_key: String,
    pub(crate) secret_key: String,
    pub(crate) ttl: u32,
    pub(crate) endpoint: String,
    pub(crate) region: String,
}

impl ProviderConfig {
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Default TTL applied when a create does not specify one.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("access_key", &mask_secret(&self.access_key))
            .field("secret_key", &mask_secret(&self.secret_key))
            .field("ttl", &self.ttl)
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .finish()
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(config_error(field, "setting is required")),
    }
}

fn config_error(field: &str, detail: impl Into<String>) -> ProviderError {
    ProviderError::ConfigurationError {
        provider: PROVIDER_ID.to_string(),
        field: field.to_string(),
        detail: detail.into(),
    }
}
