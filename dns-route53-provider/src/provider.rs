//! Route 53 `DnsRecordProvider` 实现
//!
//! 创建前通过名称解析服务做尽力而为的存在性检查（冲突检测），删除前列出区域内
//! 全部记录并按名称/类型筛选。远端 API 客户端与解析器均为惰性构造、实例内复用。

use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;

use crate::PROVIDER_ID;
use crate::config::{ProviderConfig, Route53Settings};
use crate::error::{ProviderError, Result};
use crate::lookup::HickoryLookup;
use crate::route53::Route53Client;
use crate::traits::{DnsRecordProvider, HostedZoneApi, NameLookup};
use crate::types::{ChangeResponse, RecordKind, ResourceRecordSet};
use crate::utils::names::{
    address_from_reverse_name, ensure_trailing_dot, names_equal, normalize_domain_name, reverse_name,
};
use crate::zone::resolve_zone;

/// Route 53 record provider.
///
/// # Construction
///
/// ```rust,no_run
/// use dns_route53_provider::Route53Provider;
///
/// let provider = Route53Provider::builder("your-access-key", "your-secret-key")
///     .ttl(300)
///     .build()?;
/// # Ok::<(), dns_route53_provider::ProviderError>(())
/// ```
pub struct Route53Provider {
    config: ProviderConfig,
    zone_api: OnceLock<Arc<dyn HostedZoneApi>>,
    name_lookup: OnceLock<Arc<dyn NameLookup>>,
}

/// Builder for [`Route53Provider`].
///
/// `zone_api` and `name_lookup` replace the Route 53 client and the system resolver,
/// which are otherwise built on first use.
pub struct Route53ProviderBuilder {
    settings: Route53Settings,
    zone_api: Option<Arc<dyn HostedZoneApi>>,
    name_lookup: Option<Arc<dyn NameLookup>>,
}

impl Route53ProviderBuilder {
    fn new(access_key: String, secret_key: String) -> Self {
        Self {
            settings: Route53Settings {
                aws_access_key: Some(access_key),
                aws_secret_key: Some(secret_key),
                ..Default::default()
            },
            zone_api: None,
            name_lookup: None,
        }
    }

    /// Default TTL for created records (default: 86400).
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.settings.dns_ttl = ttl;
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.settings.endpoint = endpoint.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.settings.region = region.into();
        self
    }

    pub fn zone_api(mut self, api: Arc<dyn HostedZoneApi>) -> Self {
        self.zone_api = Some(api);
        self
    }

    pub fn name_lookup(mut self, lookup: Arc<dyn NameLookup>) -> Self {
        self.name_lookup = Some(lookup);
        self
    }

    /// Validates the settings and builds the provider.
    pub fn build(self) -> Result<Route53Provider> {
        let provider = Route53Provider::from_config(self.settings.validate()?);
        if let Some(api) = self.zone_api {
            let _ = provider.zone_api.set(api);
        }
        if let Some(lookup) = self.name_lookup {
            let _ = provider.name_lookup.set(lookup);
        }
        Ok(provider)
    }
}

impl Route53Provider {
    /// Creates a provider from a credential pair and an optional default TTL.
    ///
    /// Empty credentials are a [`ProviderError::ConfigurationError`].
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        ttl: Option<u32>,
    ) -> Result<Self> {
        let mut builder = Self::builder(access_key, secret_key);
        if let Some(ttl) = ttl {
            builder = builder.ttl(ttl);
        }
        builder.build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(access_key.into(), secret_key.into())
    }

    pub fn from_settings(settings: Route53Settings) -> Result<Self> {
        Ok(Self::from_config(settings.validate()?))
    }

    pub fn from_config(config: ProviderConfig) -> Self {
        Self {
            config,
            zone_api: OnceLock::new(),
            name_lookup: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    // ==================== 惰性句柄 ====================

    fn zone_api(&self) -> Result<Arc<dyn HostedZoneApi>> {
        if let Some(api) = self.zone_api.get() {
            return Ok(Arc::clone(api));
        }
        let client: Arc<dyn HostedZoneApi> = Arc::new(Route53Client::new(&self.config)?);
        Ok(Arc::clone(self.zone_api.get_or_init(|| client)))
    }

    fn name_lookup(&self) -> Arc<dyn NameLookup> {
        Arc::clone(
            self.name_lookup
                .get_or_init(|| Arc::new(HickoryLookup::from_system())),
        )
    }

    // ==================== 存在性检查 ====================

    /// Value currently resolvable for `name`, if any.
    ///
    /// Address literals and reverse names are reverse-resolved (yielding a hostname);
    /// anything else is forward-resolved to an IPv4 address. Lookup failures count
    /// as "does not exist".
    pub async fn exists(&self, name: &str) -> Option<String> {
        let lookup = self.name_lookup();

        let result = match subject_address(name) {
            Some(address) => lookup.resolve_name(address).await,
            None => lookup
                .resolve_address(name)
                .await
                .map(|address| address.to_string()),
        };

        match result {
            Ok(value) => {
                log::debug!("[{PROVIDER_ID}] {name} resolves to {value}");
                Some(value)
            }
            Err(e) => {
                log::warn!("[{PROVIDER_ID}] Treating {name} as absent: {e}");
                None
            }
        }
    }

    // ==================== 创建 ====================

    async fn create(
        &self,
        name: &str,
        value: &str,
        kind: RecordKind,
        ttl: Option<u32>,
    ) -> Result<bool> {
        let ttl = ttl.unwrap_or(self.config.ttl);
        if ttl == 0 {
            return Err(invalid_parameter("ttl", "must be a positive number of seconds"));
        }

        // (owner, zone 查找键, 记录值)
        let (owner, zone_key, data) = match kind {
            RecordKind::A => {
                let address: Ipv4Addr = value.trim().parse().map_err(|e| {
                    invalid_parameter("value", format!("'{value}' is not an IPv4 address: {e}"))
                })?;

                if let Some(existing) = self.exists(name).await {
                    if existing.parse::<IpAddr>().ok() == Some(IpAddr::V4(address)) {
                        log::info!("[{PROVIDER_ID}] A record {name} -> {address} already exists");
                        return Ok(true);
                    }
                    return Err(ProviderError::Collision {
                        provider: PROVIDER_ID.to_string(),
                        record_name: name.to_string(),
                        existing,
                    });
                }

                (name.to_string(), ensure_trailing_dot(name), address.to_string())
            }
            RecordKind::Ptr => {
                let owner = reverse_owner(value);
                if address_from_reverse_name(&owner).is_none() {
                    return Err(invalid_parameter(
                        "value",
                        format!("'{value}' is neither an address nor a reverse name"),
                    ));
                }
                let target = ensure_trailing_dot(name);

                if let Some(existing) = self.exists(&owner).await {
                    if names_equal(&existing, &target) {
                        log::info!("[{PROVIDER_ID}] PTR record {owner} -> {target} already exists");
                        return Ok(true);
                    }
                    return Err(ProviderError::Collision {
                        provider: PROVIDER_ID.to_string(),
                        record_name: value.to_string(),
                        existing,
                    });
                }

                (owner.clone(), owner, target)
            }
        };

        let api = self.zone_api()?;
        let zone = resolve_zone(api.as_ref(), &zone_key).await?;

        let record = ResourceRecordSet::single(owner, kind, ttl, data);
        let response = api.create_record(&zone, &record).await?;
        check_change(response)?;

        log::info!(
            "[{PROVIDER_ID}] Created {kind} record {} -> {} in zone {}",
            record.name,
            record.values.join(","),
            zone.name
        );
        Ok(true)
    }

    // ==================== 删除 ====================

    async fn remove(&self, name: &str, kind: Option<RecordKind>) -> Result<bool> {
        let subject = reverse_owner(name);

        let api = self.zone_api()?;
        let zone = resolve_zone(api.as_ref(), &subject).await?;
        let records = api.list_records(&zone).await?;

        let matches: Vec<&ResourceRecordSet> = records
            .iter()
            .filter(|r| names_equal(&r.name, &subject))
            .filter(|r| kind.is_none_or(|k| k.matches(&r.record_type)))
            .collect();

        if matches.is_empty() {
            return Err(ProviderError::NotFound {
                provider: PROVIDER_ID.to_string(),
                record_name: subject,
                record_type: kind.map(|k| k.as_str().to_string()),
            });
        }

        for record in &matches {
            let response = api.delete_record(&zone, record).await?;
            check_change(response)?;
            log::info!(
                "[{PROVIDER_ID}] Deleted {} record {} from zone {}",
                record.record_type,
                record.name,
                zone.name
            );
        }

        Ok(true)
    }
}

#[async_trait]
impl DnsRecordProvider for Route53Provider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn create_record_with_ttl(
        &self,
        name: &str,
        value: &str,
        kind: RecordKind,
        ttl: Option<u32>,
    ) -> Result<bool> {
        let result = self.create(name, value, kind, ttl).await;
        if let Err(ref e) = result {
            log_failure(&format!("create {kind} {name} -> {value}"), e);
        }
        result
    }

    async fn remove_record(&self, name: &str, kind: Option<RecordKind>) -> Result<bool> {
        let result = self.remove(name, kind).await;
        if let Err(ref e) = result {
            let kind = kind.map_or("any", RecordKind::as_str);
            log_failure(&format!("remove {kind} {name}"), e);
        }
        result
    }
}

/// 地址字面量或反向解析名称对应的地址
fn subject_address(name: &str) -> Option<IpAddr> {
    normalize_domain_name(name.trim())
        .parse::<IpAddr>()
        .ok()
        .or_else(|| address_from_reverse_name(name))
}

/// 地址字面量转换为反向解析名称，其余名称补全末尾的点
fn reverse_owner(subject: &str) -> String {
    match subject.trim().parse::<IpAddr>() {
        Ok(address) => reverse_name(address),
        Err(_) => ensure_trailing_dot(subject.trim()),
    }
}

/// API 拒绝变更时转为 `RemoteApiError`，原样携带响应内容
fn check_change(response: ChangeResponse) -> Result<()> {
    if response.is_error() {
        return Err(ProviderError::RemoteApiError {
            provider: PROVIDER_ID.to_string(),
            raw_code: response.code,
            raw_message: response.message,
        });
    }
    log::debug!("[{PROVIDER_ID}] Change accepted: {response}");
    Ok(())
}

fn invalid_parameter(param: &str, detail: impl Into<String>) -> ProviderError {
    ProviderError::InvalidParameter {
        provider: PROVIDER_ID.to_string(),
        param: param.to_string(),
        detail: detail.into(),
    }
}

fn log_failure(operation: &str, e: &ProviderError) {
    if e.is_expected() {
        log::warn!("[{PROVIDER_ID}] {operation} failed: {e}");
    } else {
        log::error!("[{PROVIDER_ID}] {operation} failed: {e}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeLookup, FakeZoneApi, capture_logs, logs_containing};
    use crate::types::HostedZone;

    fn zones() -> Vec<HostedZone> {
        vec![
            HostedZone::new("Z1", "example.com."),
            HostedZone::new("Z2", "sub.example.com."),
            HostedZone::new("Z3", "1.10.in-addr.arpa."),
        ]
    }

    fn provider(api: &Arc<FakeZoneApi>, lookup: FakeLookup) -> Route53Provider {
        Route53Provider::builder("foo", "bar")
            .zone_api(Arc::clone(api) as Arc<dyn HostedZoneApi>)
            .name_lookup(Arc::new(lookup))
            .build()
            .unwrap()
    }

    fn a_record(name: &str, value: &str) -> ResourceRecordSet {
        ResourceRecordSet::single(name, RecordKind::A, 300, value)
    }

    // ============ 构造 ============

    #[test]
    fn new_requires_both_credentials() {
        assert!(matches!(
            Route53Provider::new("", "bar", None),
            Err(ProviderError::ConfigurationError { .. })
        ));
        assert!(matches!(
            Route53Provider::new("foo", "", None),
            Err(ProviderError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn new_applies_ttl() {
        assert_eq!(Route53Provider::new("foo", "bar", None).unwrap().config().ttl(), 86_400);
        assert_eq!(
            Route53Provider::new("foo", "bar", Some(300)).unwrap().config().ttl(),
            300
        );
    }

    #[test]
    fn remote_client_is_memoized() {
        let provider = Route53Provider::new("foo", "bar", None).unwrap();
        let first = provider.zone_api().unwrap();
        let second = provider.zone_api().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    // ============ 存在性检查 ============

    #[tokio::test]
    async fn exists_forward() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new().with_address("test.example.com", "10.1.1.1"));
        assert_eq!(
            provider.exists("test.example.com").await.as_deref(),
            Some("10.1.1.1")
        );
    }

    #[tokio::test]
    async fn exists_reverse_for_literal_and_reverse_name() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(
            &api,
            FakeLookup::new().with_name("10.1.1.1", "test.example.com."),
        );
        assert_eq!(
            provider.exists("10.1.1.1").await.as_deref(),
            Some("test.example.com.")
        );
        assert_eq!(
            provider.exists("1.1.1.10.in-addr.arpa.").await.as_deref(),
            Some("test.example.com.")
        );
    }

    #[tokio::test]
    async fn exists_swallows_lookup_failures() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());
        assert_eq!(provider.exists("missing.example.com").await, None);
        assert_eq!(provider.exists("10.9.9.9").await, None);
    }

    #[tokio::test]
    async fn swallowed_lookup_failure_is_logged_as_warning() {
        capture_logs();
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());
        assert_eq!(provider.exists("unresolvable.example.com").await, None);

        let logs = logs_containing("unresolvable.example.com as absent");
        assert!(
            logs.iter().any(|(level, _)| *level == log::Level::Warn),
            "{logs:?}"
        );
    }

    #[tokio::test]
    async fn exists_accepts_qualified_address_literal() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let lookup = FakeLookup::new().with_name("10.1.1.1", "test.example.com.");
        let provider = provider(&api, lookup);
        assert_eq!(
            provider.exists("10.1.1.1.").await.as_deref(),
            Some("test.example.com.")
        );
    }

    // ============ 创建 ============

    #[tokio::test]
    async fn create_a_record_issues_exact_change() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());

        assert!(
            provider
                .create_record("test.example.com", "10.1.1.1", RecordKind::A)
                .await
                .unwrap()
        );

        let created = api.created().await;
        assert_eq!(created.len(), 1);
        let (zone, record) = &created[0];
        assert_eq!(zone, &HostedZone::new("Z1", "example.com."));
        assert_eq!(
            record,
            &ResourceRecordSet::single("test.example.com", RecordKind::A, 86_400, "10.1.1.1")
        );
    }

    #[tokio::test]
    async fn create_uses_most_specific_zone() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());

        provider
            .create_a_record("host.sub.example.com", "10.1.1.2")
            .await
            .unwrap();

        assert_eq!(api.created().await[0].0.id, "Z2");
    }

    #[tokio::test]
    async fn create_a_record_collision() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new().with_address("test.example.com", "10.2.2.2"));

        let err = provider
            .create_record("test.example.com", "10.1.1.1", RecordKind::A)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, ProviderError::Collision { existing, .. } if existing == "10.2.2.2"),
            "{err:?}"
        );
        assert!(api.created().await.is_empty());
    }

    #[tokio::test]
    async fn create_same_a_record_is_idempotent() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new().with_address("test.example.com", "10.1.1.1"));

        for _ in 0..2 {
            assert!(
                provider
                    .create_record("test.example.com", "10.1.1.1", RecordKind::A)
                    .await
                    .unwrap()
            );
        }
        assert!(api.created().await.is_empty());
    }

    #[tokio::test]
    async fn create_with_ttl_override() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());

        provider
            .create_record_with_ttl("test.example.com", "10.1.1.1", RecordKind::A, Some(60))
            .await
            .unwrap();
        assert_eq!(api.created().await[0].1.ttl, Some(60));

        let err = provider
            .create_record_with_ttl("test.example.com", "10.1.1.1", RecordKind::A, Some(0))
            .await
            .unwrap_err();
        assert!(
            matches!(&err, ProviderError::InvalidParameter { param, .. } if param == "ttl"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn create_a_record_rejects_non_ipv4_value() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());

        for value in ["not-an-ip", "2001:db8::1", "10.1.1"] {
            let err = provider
                .create_record("test.example.com", value, RecordKind::A)
                .await
                .unwrap_err();
            assert!(
                matches!(&err, ProviderError::InvalidParameter { param, .. } if param == "value"),
                "{value}: {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn create_ptr_record_from_address() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());

        provider
            .create_ptr_record("test.example.com", "10.1.1.1")
            .await
            .unwrap();

        let created = api.created().await;
        let (zone, record) = &created[0];
        assert_eq!(zone.id, "Z3");
        assert_eq!(
            record,
            &ResourceRecordSet::single(
                "1.1.1.10.in-addr.arpa.",
                RecordKind::Ptr,
                86_400,
                "test.example.com."
            )
        );
    }

    #[tokio::test]
    async fn create_ptr_record_from_reverse_name() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());

        provider
            .create_ptr_record("test.example.com.", "2.1.1.10.in-addr.arpa")
            .await
            .unwrap();
        assert_eq!(api.created().await[0].1.name, "2.1.1.10.in-addr.arpa.");
    }

    #[tokio::test]
    async fn create_ptr_record_collision_and_idempotence() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let lookup = FakeLookup::new().with_name("10.1.1.1", "other.example.com.");
        let provider = provider(&api, lookup);

        let err = provider
            .create_ptr_record("test.example.com", "10.1.1.1")
            .await
            .unwrap_err();
        assert!(
            matches!(&err, ProviderError::Collision { existing, .. } if existing == "other.example.com."),
            "{err:?}"
        );

        assert!(
            provider
                .create_ptr_record("OTHER.example.com", "10.1.1.1")
                .await
                .unwrap()
        );
        assert!(api.created().await.is_empty());
    }

    #[tokio::test]
    async fn create_ptr_record_rejects_forward_name() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());

        let err = provider
            .create_ptr_record("test.example.com", "host.example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidParameter { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn create_without_zone() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());

        let err = provider
            .create_a_record("host.example.org", "10.1.1.1")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::ZoneNotFound { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn create_rejected_by_remote_api() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        api.set_rejection(Some(ChangeResponse::rejected(
            Some("InvalidChangeBatch".to_string()),
            "<InvalidChangeBatch>boom</InvalidChangeBatch>",
        )))
        .await;
        let provider = provider(&api, FakeLookup::new());

        let err = provider
            .create_a_record("test.example.com", "10.1.1.1")
            .await
            .unwrap_err();
        assert!(
            matches!(
                &err,
                ProviderError::RemoteApiError { raw_code: Some(code), raw_message, .. }
                    if code == "InvalidChangeBatch"
                        && raw_message == "<InvalidChangeBatch>boom</InvalidChangeBatch>"
            ),
            "{err:?}"
        );
    }

    // ============ 删除 ============

    #[tokio::test]
    async fn remove_without_match_is_not_found() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        api.add_record("Z1", a_record("other.example.com.", "10.1.1.9"))
            .await;
        let provider = provider(&api, FakeLookup::new());

        let err = provider
            .remove_record("test.example.com", Some(RecordKind::A))
            .await
            .unwrap_err();
        assert!(
            matches!(
                &err,
                ProviderError::NotFound { record_name, record_type: Some(t), .. }
                    if record_name == "test.example.com." && t == "A"
            ),
            "{err:?}"
        );
        assert!(api.deleted().await.is_empty());
    }

    #[tokio::test]
    async fn remove_deletes_every_match() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        api.add_record("Z1", a_record("test.example.com.", "10.1.1.1"))
            .await;
        api.add_record("Z1", a_record("Test.Example.com.", "10.1.1.2"))
            .await;
        let provider = provider(&api, FakeLookup::new());

        assert!(
            provider
                .remove_record("test.example.com", Some(RecordKind::A))
                .await
                .unwrap()
        );
        assert_eq!(api.deleted().await.len(), 2);
        assert!(api.records("Z1").await.is_empty());
    }

    #[tokio::test]
    async fn remove_ignores_other_types_and_names() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let txt = ResourceRecordSet {
            name: "test.example.com.".to_string(),
            record_type: "TXT".to_string(),
            ttl: Some(300),
            values: vec!["\"v=spf1 -all\"".to_string()],
            alias_target: None,
            routing: Default::default(),
        };
        api.add_record("Z1", a_record("test.example.com.", "10.1.1.1"))
            .await;
        api.add_record("Z1", txt.clone()).await;
        api.add_record("Z1", a_record("test2.example.com.", "10.1.1.2"))
            .await;
        let provider = provider(&api, FakeLookup::new());

        provider.remove_a_record("test.example.com").await.unwrap();

        let deleted = api.deleted().await;
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].1, a_record("test.example.com.", "10.1.1.1"));
        assert_eq!(
            api.records("Z1").await,
            vec![txt, a_record("test2.example.com.", "10.1.1.2")]
        );
    }

    #[tokio::test]
    async fn remove_without_type_deletes_all_types() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        api.add_record("Z1", a_record("test.example.com.", "10.1.1.1"))
            .await;
        api.add_record(
            "Z1",
            ResourceRecordSet::single("test.example.com.", RecordKind::Ptr, 300, "x.example.com."),
        )
        .await;
        let provider = provider(&api, FakeLookup::new());

        provider
            .remove_record("test.example.com.", None)
            .await
            .unwrap();
        assert_eq!(api.deleted().await.len(), 2);
    }

    #[tokio::test]
    async fn remove_ptr_record_by_address() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        api.add_record(
            "Z3",
            ResourceRecordSet::single(
                "1.1.1.10.in-addr.arpa.",
                RecordKind::Ptr,
                300,
                "test.example.com.",
            ),
        )
        .await;
        let provider = provider(&api, FakeLookup::new());

        provider.remove_ptr_record("10.1.1.1").await.unwrap();
        assert_eq!(api.deleted().await[0].0.id, "Z3");
    }

    #[tokio::test]
    async fn remove_rejected_by_remote_api() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        api.add_record("Z1", a_record("test.example.com.", "10.1.1.1"))
            .await;
        api.set_rejection(Some(ChangeResponse::rejected(None, "HTTP 500")))
            .await;
        let provider = provider(&api, FakeLookup::new());

        let err = provider
            .remove_a_record("test.example.com")
            .await
            .unwrap_err();
        assert!(
            matches!(&err, ProviderError::RemoteApiError { raw_message, .. } if raw_message == "HTTP 500"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn remove_without_zone() {
        let api = Arc::new(FakeZoneApi::with_zones(zones()));
        let provider = provider(&api, FakeLookup::new());

        let err = provider.remove_a_record("localhost").await.unwrap_err();
        assert!(matches!(err, ProviderError::ZoneNotFound { .. }), "{err:?}");
    }
}
