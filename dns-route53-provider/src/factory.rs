//! Provider factory functions.

use std::sync::Arc;

use crate::config::Route53Settings;
use crate::error::Result;
use crate::provider::Route53Provider;
use crate::traits::DnsRecordProvider;

/// Creates a [`DnsRecordProvider`] from host-supplied settings.
///
/// Fails with [`ConfigurationError`](crate::ProviderError::ConfigurationError) when
/// either credential is missing. The returned provider is wrapped in
/// `Arc<dyn DnsRecordProvider>` for easy sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_route53_provider::{create_provider, Route53Settings};
///
/// let provider = create_provider(Route53Settings::from_env()?)?;
/// assert_eq!(provider.id(), "route53");
/// # Ok::<(), dns_route53_provider::ProviderError>(())
/// ```
pub fn create_provider(settings: Route53Settings) -> Result<Arc<dyn DnsRecordProvider>> {
    let provider = Route53Provider::from_settings(settings)?;
    log::debug!(
        "Created {} provider (default TTL {}s)",
        provider.id(),
        provider.config().ttl()
    );
    Ok(Arc::new(provider))
}
