use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::utils::names::ensure_trailing_dot;

/// A hosted zone as reported by the remote API.
///
/// `name` is always fully qualified (trailing dot), e.g. `example.com.` or
/// `2.1.10.in-addr.arpa.`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedZone {
    /// Zone identifier used by the remote API (without any `/hostedzone/` prefix).
    pub id: String,
    /// Fully qualified zone suffix.
    pub name: String,
}

impl HostedZone {
    pub fn new(id: impl Into<String>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: ensure_trailing_dot(name),
        }
    }
}

/// Target of an alias record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTarget {
    pub hosted_zone_id: String,
    pub dns_name: String,
    pub evaluate_target_health: bool,
}

/// Geolocation routing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub continent_code: Option<String>,
    pub country_code: Option<String>,
    pub subdivision_code: Option<String>,
}

/// Routing-policy attributes of a record set (weighted, latency, failover,
/// geolocation, multivalue). All empty for simple routing.
///
/// A delete must repeat these exactly as listed, otherwise the API does not
/// consider it the same record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingPolicy {
    pub set_identifier: Option<String>,
    pub weight: Option<u64>,
    pub region: Option<String>,
    pub geo_location: Option<GeoLocation>,
    /// `PRIMARY` / `SECONDARY`
    pub failover: Option<String>,
    pub multi_value_answer: Option<bool>,
    pub health_check_id: Option<String>,
}

/// One resource record set inside a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    /// Owner name. Remote listings return it fully qualified.
    pub name: String,
    /// Record type as reported by the API (`A`, `PTR`, `SOA`, ...).
    pub record_type: String,
    /// TTL in seconds. Absent for alias record sets.
    pub ttl: Option<u32>,
    /// Ordered record values.
    pub values: Vec<String>,
    /// Present only for alias record sets.
    pub alias_target: Option<AliasTarget>,
    /// Routing-policy attributes, echoed back on delete.
    #[serde(default)]
    pub routing: RoutingPolicy,
}

impl ResourceRecordSet {
    /// Builds a plain (non-alias) record set with a single value.
    pub fn single(
        name: impl Into<String>,
        record_type: RecordKind,
        ttl: u32,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.as_str().to_string(),
            ttl: Some(ttl),
            values: vec![value.into()],
            alias_target: None,
            routing: RoutingPolicy::default(),
        }
    }
}

/// Record types this provider can create and delete.
///
/// Each variant knows which name its zone is resolved from and how an existing
/// value is compared against the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// Forward record: hostname -> IPv4 address.
    A,
    /// Reverse record: address-derived name -> hostname.
    Ptr,
}

impl RecordKind {
    /// Uppercase wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Ptr => "PTR",
        }
    }

    /// Parses a record type, rejecting types this provider cannot manage.
    pub fn parse(record_type: &str, provider: &str) -> Result<Self, ProviderError> {
        match record_type.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "PTR" => Ok(Self::Ptr),
            _ => Err(ProviderError::UnsupportedRecordType {
                provider: provider.to_string(),
                record_type: record_type.to_string(),
            }),
        }
    }

    /// Whether a remote record set's type string is this kind.
    pub fn matches(self, record_type: &str) -> bool {
        record_type.eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, crate::PROVIDER_ID)
    }
}

/// Outcome of a create/delete submitted to the remote API.
///
/// A rejected change is not a transport failure: the API answered, but refused the
/// mutation. The provider turns that into [`ProviderError::RemoteApiError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeResponse {
    /// Whether the API reported an error condition.
    pub error: bool,
    /// Remote error code, when one could be parsed.
    pub code: Option<String>,
    /// Change summary on success, raw error payload on failure.
    pub message: String,
}

impl ChangeResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            error: false,
            code: None,
            message: message.into(),
        }
    }

    pub fn rejected(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            error: true,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error
    }
}

impl fmt::Display for ChangeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
