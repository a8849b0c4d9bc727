//! Route 53 `HostedZoneApi` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{ErrorContext, HostedZoneApi};
use crate::types::{ChangeResponse, HostedZone, ResourceRecordSet};
use crate::utils::names::names_equal;

use super::types::{
    Change, ChangeAction, ChangeBatch, ChangeResourceRecordSetsRequest, Changes,
    ListHostedZonesResponse, ListResourceRecordSetsResponse,
};
use super::{API_VERSION, Route53Client, XML_NAMESPACE};

/// 单页最大条数
const MAX_ITEMS: &str = "100";

impl Route53Client {
    /// 遍历 `ListHostedZones` 全部分页
    async fn list_all_zones(&self) -> Result<Vec<HostedZone>> {
        let path = format!("/{API_VERSION}/hostedzone");
        let mut zones = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let mut params = vec![("maxitems", MAX_ITEMS)];
            if let Some(ref m) = marker {
                params.push(("marker", m.as_str()));
            }

            let response: ListHostedZonesResponse =
                self.get(&path, &params, ErrorContext::default()).await?;
            zones.extend(response.hosted_zones.items.into_iter().map(HostedZone::from));

            match response.next_marker {
                Some(next) if response.is_truncated => marker = Some(next),
                _ => break,
            }
        }

        Ok(zones)
    }

    /// `ListHostedZonesByName` 从 `dnsname` 开始按字典序返回，只保留名称完全相同的区域
    async fn list_zones_named(&self, name: &str) -> Result<Vec<HostedZone>> {
        let path = format!("/{API_VERSION}/hostedzonesbyname");
        let ctx = ErrorContext {
            zone: Some(name.to_string()),
        };
        let mut zones = Vec::new();
        let mut cursor: (String, Option<String>) = (name.to_string(), None);

        loop {
            let mut params = vec![("dnsname", cursor.0.as_str()), ("maxitems", MAX_ITEMS)];
            if let Some(ref id) = cursor.1 {
                params.push(("hostedzoneid", id.as_str()));
            }

            let response: ListHostedZonesResponse = self.get(&path, &params, ctx.clone()).await?;

            let page: Vec<HostedZone> = response
                .hosted_zones
                .items
                .into_iter()
                .map(HostedZone::from)
                .collect();
            // 结果有序：出现其他名称后不会再有匹配
            let passed = page.iter().any(|z| !names_equal(&z.name, name));
            zones.extend(page.into_iter().filter(|z| names_equal(&z.name, name)));

            match (response.next_dns_name, response.next_hosted_zone_id) {
                (Some(next_name), next_id)
                    if response.is_truncated && !passed && names_equal(&next_name, name) =>
                {
                    cursor = (next_name, next_id);
                }
                _ => break,
            }
        }

        Ok(zones)
    }

    /// 构造只含一个变更的请求体
    fn change_request(action: ChangeAction, record: &ResourceRecordSet) -> ChangeResourceRecordSetsRequest {
        ChangeResourceRecordSetsRequest {
            xmlns: XML_NAMESPACE,
            change_batch: ChangeBatch {
                comment: None,
                changes: Changes {
                    items: vec![Change {
                        action: action.as_str(),
                        record_set: record.into(),
                    }],
                },
            },
        }
    }

    async fn submit_change(
        &self,
        zone: &HostedZone,
        action: ChangeAction,
        record: &ResourceRecordSet,
    ) -> Result<ChangeResponse> {
        let path = format!("/{API_VERSION}/hostedzone/{}/rrset", zone.id);
        let body = Self::change_request(action, record);
        self.post_change(&path, &body).await
    }
}

#[async_trait]
impl HostedZoneApi for Route53Client {
    async fn list_zones(&self, name: Option<&str>) -> Result<Vec<HostedZone>> {
        match name {
            Some(name) => self.list_zones_named(name).await,
            None => self.list_all_zones().await,
        }
    }

    async fn list_records(&self, zone: &HostedZone) -> Result<Vec<ResourceRecordSet>> {
        let path = format!("/{API_VERSION}/hostedzone/{}/rrset", zone.id);
        let ctx = ErrorContext {
            zone: Some(zone.name.clone()),
        };
        let mut records = Vec::new();
        // (name, type, identifier)
        let mut start: Option<(String, Option<String>, Option<String>)> = None;

        loop {
            let mut params = vec![("maxitems", MAX_ITEMS)];
            if let Some((ref name, ref record_type, ref identifier)) = start {
                params.push(("name", name.as_str()));
                if let Some(t) = record_type {
                    params.push(("type", t.as_str()));
                }
                if let Some(id) = identifier {
                    params.push(("identifier", id.as_str()));
                }
            }

            let response: ListResourceRecordSetsResponse =
                self.get(&path, &params, ctx.clone()).await?;
            records.extend(
                response
                    .record_sets
                    .items
                    .into_iter()
                    .map(ResourceRecordSet::from),
            );

            match response.next_record_name {
                Some(next) if response.is_truncated => {
                    start = Some((
                        next,
                        response.next_record_type,
                        response.next_record_identifier,
                    ));
                }
                _ => break,
            }
        }

        log::debug!(
            "[{}] {} record sets in zone {}",
            crate::PROVIDER_ID,
            records.len(),
            zone.name
        );
        Ok(records)
    }

    async fn create_record(
        &self,
        zone: &HostedZone,
        record: &ResourceRecordSet,
    ) -> Result<ChangeResponse> {
        self.submit_change(zone, ChangeAction::Create, record).await
    }

    async fn delete_record(
        &self,
        zone: &HostedZone,
        record: &ResourceRecordSet,
    ) -> Result<ChangeResponse> {
        self.submit_change(zone, ChangeAction::Delete, record).await
    }
}
