//! 测试辅助模块
//!
//! 提供 `HostedZoneApi` / `NameLookup` 的内存实现。

#![allow(clippy::panic)]

use std::collections::HashMap;
use std::net::IpAddr;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::lookup::LookupError;
use crate::traits::{HostedZoneApi, NameLookup};
use crate::types::{ChangeResponse, HostedZone, ResourceRecordSet};
use crate::utils::names::{names_equal, normalize_domain_name};

// ===== FakeZoneApi =====

pub struct FakeZoneApi {
    zones: Vec<HostedZone>,
    /// zone id -> record sets
    records: RwLock<HashMap<String, Vec<ResourceRecordSet>>>,
    created: RwLock<Vec<(HostedZone, ResourceRecordSet)>>,
    deleted: RwLock<Vec<(HostedZone, ResourceRecordSet)>>,
    /// 如果 Some，create/delete 返回此响应（用于测试拒绝路径）
    rejection: RwLock<Option<ChangeResponse>>,
}

impl FakeZoneApi {
    pub fn with_zones(zones: Vec<HostedZone>) -> Self {
        Self {
            zones,
            records: RwLock::new(HashMap::new()),
            created: RwLock::new(Vec::new()),
            deleted: RwLock::new(Vec::new()),
            rejection: RwLock::new(None),
        }
    }

    pub async fn add_record(&self, zone_id: &str, record: ResourceRecordSet) {
        self.records
            .write()
            .await
            .entry(zone_id.to_string())
            .or_default()
            .push(record);
    }

    pub async fn set_rejection(&self, response: Option<ChangeResponse>) {
        *self.rejection.write().await = response;
    }

    pub async fn created(&self) -> Vec<(HostedZone, ResourceRecordSet)> {
        self.created.read().await.clone()
    }

    pub async fn deleted(&self) -> Vec<(HostedZone, ResourceRecordSet)> {
        self.deleted.read().await.clone()
    }

    pub async fn records(&self, zone_id: &str) -> Vec<ResourceRecordSet> {
        self.records
            .read()
            .await
            .get(zone_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl HostedZoneApi for FakeZoneApi {
    async fn list_zones(&self, name: Option<&str>) -> Result<Vec<HostedZone>> {
        Ok(self
            .zones
            .iter()
            .filter(|z| name.is_none_or(|n| names_equal(&z.name, n)))
            .cloned()
            .collect())
    }

    async fn list_records(&self, zone: &HostedZone) -> Result<Vec<ResourceRecordSet>> {
        Ok(self.records(&zone.id).await)
    }

    async fn create_record(
        &self,
        zone: &HostedZone,
        record: &ResourceRecordSet,
    ) -> Result<ChangeResponse> {
        if let Some(ref response) = *self.rejection.read().await {
            return Ok(response.clone());
        }
        self.created
            .write()
            .await
            .push((zone.clone(), record.clone()));
        self.add_record(&zone.id, record.clone()).await;
        Ok(ChangeResponse::accepted("/change/C1 PENDING"))
    }

    async fn delete_record(
        &self,
        zone: &HostedZone,
        record: &ResourceRecordSet,
    ) -> Result<ChangeResponse> {
        if let Some(ref response) = *self.rejection.read().await {
            return Ok(response.clone());
        }
        self.deleted
            .write()
            .await
            .push((zone.clone(), record.clone()));
        if let Some(records) = self.records.write().await.get_mut(&zone.id)
            && let Some(pos) = records.iter().position(|r| r == record)
        {
            records.remove(pos);
        }
        Ok(ChangeResponse::accepted("/change/C2 PENDING"))
    }
}

// ===== FakeLookup =====

#[derive(Default)]
pub struct FakeLookup {
    forward: HashMap<String, IpAddr>,
    reverse: HashMap<IpAddr, String>,
    queries: RwLock<Vec<String>>,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, hostname: &str, address: &str) -> Self {
        self.forward.insert(
            normalize_domain_name(hostname).to_ascii_lowercase(),
            address.parse().unwrap_or_else(|e| panic!("bad address {address}: {e}")),
        );
        self
    }

    pub fn with_name(mut self, address: &str, hostname: &str) -> Self {
        self.reverse.insert(
            address.parse().unwrap_or_else(|e| panic!("bad address {address}: {e}")),
            hostname.to_string(),
        );
        self
    }

    /// Every query issued so far, in order.
    pub async fn queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl NameLookup for FakeLookup {
    async fn resolve_address(&self, hostname: &str) -> std::result::Result<IpAddr, LookupError> {
        self.queries.write().await.push(hostname.to_string());
        self.forward
            .get(&normalize_domain_name(hostname).to_ascii_lowercase())
            .copied()
            .ok_or_else(|| LookupError::Failed {
                query: hostname.to_string(),
                detail: "NXDOMAIN".to_string(),
            })
    }

    async fn resolve_name(&self, address: IpAddr) -> std::result::Result<String, LookupError> {
        self.queries.write().await.push(address.to_string());
        self.reverse
            .get(&address)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(address.to_string()))
    }
}

// ===== CapturedLogs =====

/// 进程级日志收集器（`log` 只允许设置一次 logger）
struct CapturingLogger {
    records: std::sync::Mutex<Vec<(log::Level, String)>>,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: std::sync::Mutex::new(Vec::new()),
};

/// 安装收集器；重复调用无副作用
pub fn capture_logs() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// 已收集的、包含 `needle` 的日志（测试并行运行，按内容过滤）
pub fn logs_containing(needle: &str) -> Vec<(log::Level, String)> {
    LOGGER
        .records
        .lock()
        .map(|records| {
            records
                .iter()
                .filter(|(_, message)| message.contains(needle))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
