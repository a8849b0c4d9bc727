//! Route 53 API type definition

use serde::{Deserialize, Serialize};

use crate::types::{AliasTarget, GeoLocation, HostedZone, ResourceRecordSet, RoutingPolicy};

// ============ Route 53 API response structure ============

/// Response payload for `ListHostedZones` and `ListHostedZonesByName`.
#[derive(Debug, Deserialize)]
pub struct ListHostedZonesResponse {
    #[serde(rename = "HostedZones", default)]
    pub hosted_zones: HostedZones,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    /// Set by `ListHostedZones` when truncated.
    #[serde(rename = "NextMarker")]
    pub next_marker: Option<String>,
    /// Set by `ListHostedZonesByName` when truncated.
    #[serde(rename = "NextDNSName")]
    pub next_dns_name: Option<String>,
    #[serde(rename = "NextHostedZoneId")]
    pub next_hosted_zone_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostedZones {
    #[serde(rename = "HostedZone", default)]
    pub items: Vec<Route53HostedZone>,
}

/// Hosted zone item.
#[derive(Debug, Deserialize)]
pub struct Route53HostedZone {
    /// `/hostedzone/<id>`
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

impl From<Route53HostedZone> for HostedZone {
    fn from(zone: Route53HostedZone) -> Self {
        let id = zone
            .id
            .strip_prefix("/hostedzone/")
            .unwrap_or(&zone.id)
            .to_string();
        HostedZone::new(id, &zone.name)
    }
}

/// Response payload for `ListResourceRecordSets`.
#[derive(Debug, Deserialize)]
pub struct ListResourceRecordSetsResponse {
    #[serde(rename = "ResourceRecordSets", default)]
    pub record_sets: ResourceRecordSets,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    #[serde(rename = "NextRecordName")]
    pub next_record_name: Option<String>,
    #[serde(rename = "NextRecordType")]
    pub next_record_type: Option<String>,
    #[serde(rename = "NextRecordIdentifier")]
    pub next_record_identifier: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceRecordSets {
    #[serde(rename = "ResourceRecordSet", default)]
    pub items: Vec<Route53RecordSet>,
}

/// Record set item, shared by responses and change requests.
///
/// Field order follows the API schema, which the request body must respect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route53RecordSet {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "SetIdentifier", skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
    #[serde(rename = "Weight", skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
    #[serde(rename = "Region", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "GeoLocation", skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<Route53GeoLocation>,
    #[serde(rename = "Failover", skip_serializing_if = "Option::is_none")]
    pub failover: Option<String>,
    #[serde(rename = "MultiValueAnswer", skip_serializing_if = "Option::is_none")]
    pub multi_value_answer: Option<bool>,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(rename = "ResourceRecords", skip_serializing_if = "Option::is_none")]
    pub resource_records: Option<ResourceRecords>,
    #[serde(rename = "AliasTarget", skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<Route53AliasTarget>,
    #[serde(rename = "HealthCheckId", skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route53GeoLocation {
    #[serde(rename = "ContinentCode", skip_serializing_if = "Option::is_none")]
    pub continent_code: Option<String>,
    #[serde(rename = "CountryCode", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(rename = "SubdivisionCode", skip_serializing_if = "Option::is_none")]
    pub subdivision_code: Option<String>,
}

impl From<Route53GeoLocation> for GeoLocation {
    fn from(geo: Route53GeoLocation) -> Self {
        Self {
            continent_code: geo.continent_code,
            country_code: geo.country_code,
            subdivision_code: geo.subdivision_code,
        }
    }
}

impl From<&GeoLocation> for Route53GeoLocation {
    fn from(geo: &GeoLocation) -> Self {
        Self {
            continent_code: geo.continent_code.clone(),
            country_code: geo.country_code.clone(),
            subdivision_code: geo.subdivision_code.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route53AliasTarget {
    #[serde(rename = "HostedZoneId")]
    pub hosted_zone_id: String,
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    #[serde(rename = "EvaluateTargetHealth", default)]
    pub evaluate_target_health: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRecords {
    #[serde(rename = "ResourceRecord", default)]
    pub items: Vec<ResourceRecordValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecordValue {
    #[serde(rename = "Value")]
    pub value: String,
}

impl From<Route53RecordSet> for ResourceRecordSet {
    fn from(rrset: Route53RecordSet) -> Self {
        Self {
            name: rrset.name,
            record_type: rrset.record_type,
            ttl: rrset.ttl,
            values: rrset
                .resource_records
                .map(|r| r.items.into_iter().map(|v| v.value).collect())
                .unwrap_or_default(),
            alias_target: rrset.alias_target.map(|a| AliasTarget {
                hosted_zone_id: a.hosted_zone_id,
                dns_name: a.dns_name,
                evaluate_target_health: a.evaluate_target_health,
            }),
            routing: RoutingPolicy {
                set_identifier: rrset.set_identifier,
                weight: rrset.weight,
                region: rrset.region,
                geo_location: rrset.geo_location.map(GeoLocation::from),
                failover: rrset.failover,
                multi_value_answer: rrset.multi_value_answer,
                health_check_id: rrset.health_check_id,
            },
        }
    }
}

impl From<&ResourceRecordSet> for Route53RecordSet {
    fn from(rrset: &ResourceRecordSet) -> Self {
        let resource_records = if rrset.alias_target.is_some() {
            None
        } else {
            Some(ResourceRecords {
                items: rrset
                    .values
                    .iter()
                    .map(|v| ResourceRecordValue { value: v.clone() })
                    .collect(),
            })
        };

        let routing = &rrset.routing;
        Self {
            name: rrset.name.clone(),
            record_type: rrset.record_type.clone(),
            set_identifier: routing.set_identifier.clone(),
            weight: routing.weight,
            region: routing.region.clone(),
            geo_location: routing.geo_location.as_ref().map(Route53GeoLocation::from),
            failover: routing.failover.clone(),
            multi_value_answer: routing.multi_value_answer,
            ttl: rrset.ttl,
            resource_records,
            alias_target: rrset.alias_target.as_ref().map(|a| Route53AliasTarget {
                hosted_zone_id: a.hosted_zone_id.clone(),
                dns_name: a.dns_name.clone(),
                evaluate_target_health: a.evaluate_target_health,
            }),
            health_check_id: routing.health_check_id.clone(),
        }
    }
}

// ============ ChangeResourceRecordSets ============

/// Request body for `ChangeResourceRecordSets`. The struct name is the XML root.
#[derive(Debug, Serialize)]
pub struct ChangeResourceRecordSetsRequest {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "ChangeBatch")]
    pub change_batch: ChangeBatch,
}

#[derive(Debug, Serialize)]
pub struct ChangeBatch {
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "Changes")]
    pub changes: Changes,
}

#[derive(Debug, Serialize)]
pub struct Changes {
    #[serde(rename = "Change")]
    pub items: Vec<Change>,
}

#[derive(Debug, Serialize)]
pub struct Change {
    /// `CREATE` / `DELETE`
    #[serde(rename = "Action")]
    pub action: &'static str,
    #[serde(rename = "ResourceRecordSet")]
    pub record_set: Route53RecordSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Create,
    Delete,
}

impl ChangeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Delete => "DELETE",
        }
    }
}

/// Response payload for `ChangeResourceRecordSets`.
#[derive(Debug, Deserialize)]
pub struct ChangeResourceRecordSetsResponse {
    #[serde(rename = "ChangeInfo")]
    pub change_info: ChangeInfo,
}

#[derive(Debug, Deserialize)]
pub struct ChangeInfo {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Status")]
    pub status: String,
}

// ============ Errors ============

/// Error payload returned by Route 53 (`<ErrorResponse><Error>...`).
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "Code")]
    pub code: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

/// `InvalidChangeBatch` payload (`<InvalidChangeBatch><Messages><Message>...`).
#[derive(Debug, Deserialize)]
pub struct InvalidChangeBatch {
    #[serde(rename = "Messages")]
    pub messages: Option<BatchMessages>,
}

#[derive(Debug, Deserialize)]
pub struct BatchMessages {
    #[serde(rename = "Message", default)]
    pub items: Vec<String>,
}
