//! System DNS lookups used for existence checks.

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::{TokioResolver, config::ResolverConfig, name_server::TokioConnectionProvider};

use crate::traits::NameLookup;

/// Failure of a forward or reverse lookup.
///
/// Callers of the existence check treat every variant as "name does not exist".
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The query succeeded but returned no answer.
    #[error("no answer for {0}")]
    NotFound(String),

    /// The resolver failed (NXDOMAIN, timeout, unreachable server, ...).
    #[error("lookup of {query} failed: {detail}")]
    Failed { query: String, detail: String },
}

/// [`NameLookup`] backed by the host resolver configuration.
pub struct HickoryLookup {
    resolver: TokioResolver,
}

impl HickoryLookup {
    /// Uses the system DNS configuration (e.g. `/etc/resolv.conf`), falling back to
    /// Hickory's default upstream set when it cannot be loaded.
    pub fn from_system() -> Self {
        Self {
            resolver: build_system_resolver(),
        }
    }

    pub fn with_resolver(resolver: TokioResolver) -> Self {
        Self { resolver }
    }
}

impl Default for HickoryLookup {
    fn default() -> Self {
        Self::from_system()
    }
}

fn build_system_resolver() -> TokioResolver {
    #[cfg(any(unix, target_os = "windows"))]
    {
        match TokioResolver::builder_tokio() {
            Ok(builder) => return builder.build(),
            Err(e) => {
                log::warn!(
                    "Failed to load system DNS configuration, falling back to defaults: {e}"
                );
            }
        }
    }

    TokioResolver::builder_with_config(
        ResolverConfig::default(),
        TokioConnectionProvider::default(),
    )
    .build()
}

#[async_trait]
impl NameLookup for HickoryLookup {
    async fn resolve_address(&self, hostname: &str) -> Result<IpAddr, LookupError> {
        let response = self
            .resolver
            .ipv4_lookup(hostname)
            .await
            .map_err(|e| LookupError::Failed {
                query: hostname.to_string(),
                detail: e.to_string(),
            })?;

        response
            .iter()
            .next()
            .map(|a| IpAddr::V4(a.0))
            .ok_or_else(|| LookupError::NotFound(hostname.to_string()))
    }

    async fn resolve_name(&self, address: IpAddr) -> Result<String, LookupError> {
        let response = self
            .resolver
            .reverse_lookup(address)
            .await
            .map_err(|e| LookupError::Failed {
                query: address.to_string(),
                detail: e.to_string(),
            })?;

        response
            .iter()
            .next()
            .map(|ptr| ptr.0.to_string())
            .ok_or_else(|| LookupError::NotFound(address.to_string()))
    }
}
