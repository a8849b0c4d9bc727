//! # dns-route53-provider
//!
//! A DNS record provider that creates and deletes `A` and `PTR` records in
//! [AWS Route 53](https://aws.amazon.com/route53/) hosted zones on behalf of a
//! DNS-management host.
//!
//! Every operation resolves the most specific hosted zone covering the record
//! name (longest suffix wins, reverse zones included), then:
//!
//! - **create** checks the name against the system resolver first and refuses to
//!   overwrite a different value ([`ProviderError::Collision`]); re-creating an
//!   identical record succeeds without touching the API.
//! - **remove** lists the zone and deletes every record set with the same name
//!   (and type, when given); nothing to delete is [`ProviderError::NotFound`].
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* - Use the platform's native TLS implementation.
//! - **`rustls`** - Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_route53_provider::{create_provider, DnsRecordProvider, Route53Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // AWS_ACCESS_KEY / AWS_SECRET_KEY / DNS_TTL
//!     let provider = create_provider(Route53Settings::from_env()?)?;
//!
//!     provider.create_a_record("host.example.com", "10.1.1.1").await?;
//!     provider.create_ptr_record("host.example.com", "10.1.1.1").await?;
//!
//!     provider.remove_ptr_record("10.1.1.1").await?;
//!     provider.remove_a_record("host.example.com").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Nothing is
//! retried; every failure surfaces to the caller:
//!
//! - [`ProviderError::ConfigurationError`] - missing credentials or bad settings
//! - [`ProviderError::ZoneNotFound`] - no hosted zone covers the name
//! - [`ProviderError::Collision`] - the name already resolves to another value
//! - [`ProviderError::NotFound`] - nothing matched a delete
//! - [`ProviderError::RemoteApiError`] - Route 53 rejected the change (raw payload kept)
//!
//! Resolver failures during the existence check are not errors; the name is
//! treated as unused.

mod config;
mod error;
mod factory;
mod http_client;
mod lookup;
mod provider;
mod route53;
mod traits;
mod types;
mod utils;
mod zone;

#[cfg(test)]
mod test_utils;

/// Provider identifier reported in every error.
pub(crate) const PROVIDER_ID: &str = "route53";

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export configuration
pub use config::{DEFAULT_ENDPOINT, DEFAULT_REGION, DEFAULT_TTL, ProviderConfig, Route53Settings};

// Re-export factory functions
pub use factory::create_provider;

// Re-export public traits (the error mapper stays internal)
pub use traits::{DnsRecordProvider, HostedZoneApi, NameLookup};

// Re-export types
pub use types::{
    AliasTarget, ChangeResponse, GeoLocation, HostedZone, RecordKind, ResourceRecordSet,
    RoutingPolicy,
};

// Re-export implementations
pub use lookup::{HickoryLookup, LookupError};
pub use provider::{Route53Provider, Route53ProviderBuilder};
pub use route53::Route53Client;
pub use zone::{candidate_suffixes, find_zone, resolve_zone};

// Re-export utils module
pub use utils::names;
