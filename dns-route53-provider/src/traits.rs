use std::net::IpAddr;

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::lookup::LookupError;
use crate::types::{ChangeResponse, HostedZone, RecordKind, ResourceRecordSet};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（Route 53 的 `Error/Code`）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 区域名称或 ID（用于 `ZoneNotFound`）
    pub zone: Option<String>,
}

/// Provider 错误映射 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未识别的 API 错误（fallback）
    fn remote_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::RemoteApiError {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Remote zone-based DNS hosting API.
///
/// Every call is a fresh round-trip; implementations hold no record state.
#[async_trait]
pub trait HostedZoneApi: Send + Sync {
    /// Lists hosted zones. With `name`, only zones whose name equals it exactly.
    async fn list_zones(&self, name: Option<&str>) -> Result<Vec<HostedZone>>;

    /// Lists every record set in `zone`.
    async fn list_records(&self, zone: &HostedZone) -> Result<Vec<ResourceRecordSet>>;

    /// Submits creation of `record` in `zone`.
    ///
    /// `Err` is reserved for transport/parse failures; a refusal by the API is
    /// reported through [`ChangeResponse::error`].
    async fn create_record(
        &self,
        zone: &HostedZone,
        record: &ResourceRecordSet,
    ) -> Result<ChangeResponse>;

    /// Submits deletion of `record` from `zone`. Same error contract as `create_record`.
    async fn delete_record(
        &self,
        zone: &HostedZone,
        record: &ResourceRecordSet,
    ) -> Result<ChangeResponse>;
}

/// Name-resolution service used for best-effort existence checks.
#[async_trait]
pub trait NameLookup: Send + Sync {
    /// Forward lookup: hostname -> address.
    async fn resolve_address(&self, hostname: &str) -> std::result::Result<IpAddr, LookupError>;

    /// Reverse lookup: address -> hostname.
    async fn resolve_name(&self, address: IpAddr) -> std::result::Result<String, LookupError>;
}

/// DNS 记录提供商 Trait（宿主调用入口）
#[async_trait]
pub trait DnsRecordProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 创建记录；`ttl` 为 `None` 时使用配置的默认值
    ///
    /// 对 `A`，`name` 为主机名、`value` 为 IPv4 地址；
    /// 对 `PTR`，`name` 为目标主机名、`value` 为地址或反向解析名称。
    /// 已存在相同值时视为成功（幂等）。
    async fn create_record_with_ttl(
        &self,
        name: &str,
        value: &str,
        kind: RecordKind,
        ttl: Option<u32>,
    ) -> Result<bool>;

    /// 删除所有名称（及类型，如提供）匹配的记录
    async fn remove_record(&self, name: &str, kind: Option<RecordKind>) -> Result<bool>;

    /// 使用默认 TTL 创建记录
    async fn create_record(&self, name: &str, value: &str, kind: RecordKind) -> Result<bool> {
        self.create_record_with_ttl(name, value, kind, None).await
    }

    /// 创建正向记录
    async fn create_a_record(&self, fqdn: &str, ip: &str) -> Result<bool> {
        self.create_record(fqdn, ip, RecordKind::A).await
    }

    /// 创建反向记录
    async fn create_ptr_record(&self, fqdn: &str, reverse: &str) -> Result<bool> {
        self.create_record(fqdn, reverse, RecordKind::Ptr).await
    }

    /// 删除正向记录
    async fn remove_a_record(&self, fqdn: &str) -> Result<bool> {
        self.remove_record(fqdn, Some(RecordKind::A)).await
    }

    /// 删除反向记录（`reverse` 为地址或反向解析名称）
    async fn remove_ptr_record(&self, reverse: &str) -> Result<bool> {
        self.remove_record(reverse, Some(RecordKind::Ptr)).await
    }
}
