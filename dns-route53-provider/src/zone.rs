//! Zone resolution
//!
//! A name is placed in the most specific hosted zone whose name is a proper suffix
//! of it. Candidates are produced by dropping leading labels one at a time, so the
//! first candidate that matches a zone is the longest one.

use crate::PROVIDER_ID;
use crate::error::{ProviderError, Result};
use crate::traits::HostedZoneApi;
use crate::types::HostedZone;
use crate::utils::names::{ensure_trailing_dot, labels, names_equal};

/// Proper suffixes of `name`, longest first, each fully qualified.
///
/// `"test.example.com."` -> `["example.com.", "com."]`. The name itself is never a
/// candidate; a single-label name has none.
pub fn candidate_suffixes(name: &str) -> Vec<String> {
    let labels = labels(name);
    (1..labels.len())
        .map(|i| ensure_trailing_dot(&labels[i..].join(".")))
        .collect()
}

/// Picks the most specific zone in `zones` covering `name`.
pub fn find_zone<'a>(zones: &'a [HostedZone], name: &str) -> Option<&'a HostedZone> {
    candidate_suffixes(name)
        .iter()
        .find_map(|suffix| zones.iter().find(|z| names_equal(&z.name, suffix)))
}

/// Lists the hosted zones and resolves the one covering `name`.
pub async fn resolve_zone(api: &dyn HostedZoneApi, name: &str) -> Result<HostedZone> {
    let zones = api.list_zones(None).await?;
    log::debug!("[{PROVIDER_ID}] Resolving zone for {name} among {} zones", zones.len());

    find_zone(&zones, name)
        .cloned()
        .ok_or_else(|| ProviderError::ZoneNotFound {
            provider: PROVIDER_ID.to_string(),
            name: name.to_string(),
            raw_message: None,
        })
}
