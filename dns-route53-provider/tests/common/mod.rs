//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::env;
use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use dns_route53_provider::{
    DnsRecordProvider, LookupError, NameLookup, Route53Settings, create_provider, names,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("test-{}", &uuid.to_string()[..8])
}

/// 在反向区域内生成一个地址（剩余字节随机）
///
/// 如: "2.1.10.in-addr.arpa" -> 10.1.2.x
pub fn address_in_reverse_zone(zone: &str) -> Option<IpAddr> {
    let prefix = zone
        .trim_end_matches('.')
        .to_ascii_lowercase()
        .strip_suffix(".in-addr.arpa")?
        .to_string();
    let mut octets: Vec<String> = prefix.split('.').rev().map(str::to_string).collect();
    if octets.is_empty() || octets.len() > 3 {
        return None;
    }

    let random = uuid::Uuid::new_v4();
    let bytes = random.as_bytes();
    let mut i = 0;
    while octets.len() < 4 {
        // 避开 0 和 255
        octets.push((bytes[i] % 253 + 1).to_string());
        i += 1;
    }

    octets.join(".").parse().ok()
}

/// 不会解析出任何结果的 `NameLookup`
pub struct NoLookup;

#[async_trait]
impl NameLookup for NoLookup {
    async fn resolve_address(&self, hostname: &str) -> Result<IpAddr, LookupError> {
        Err(LookupError::NotFound(hostname.to_string()))
    }

    async fn resolve_name(&self, address: IpAddr) -> Result<String, LookupError> {
        Err(LookupError::NotFound(address.to_string()))
    }
}

/// 返回固定结果的 `NameLookup`
#[derive(Default)]
pub struct StaticLookup {
    forward: HashMap<String, IpAddr>,
    reverse: HashMap<IpAddr, String>,
}

impl StaticLookup {
    pub fn with_address(mut self, hostname: &str, address: IpAddr) -> Self {
        self.forward
            .insert(names::normalize_domain_name(hostname).to_ascii_lowercase(), address);
        self
    }

    pub fn with_name(mut self, address: IpAddr, hostname: &str) -> Self {
        self.reverse.insert(address, hostname.to_string());
        self
    }
}

#[async_trait]
impl NameLookup for StaticLookup {
    async fn resolve_address(&self, hostname: &str) -> Result<IpAddr, LookupError> {
        self.forward
            .get(&names::normalize_domain_name(hostname).to_ascii_lowercase())
            .copied()
            .ok_or_else(|| LookupError::NotFound(hostname.to_string()))
    }

    async fn resolve_name(&self, address: IpAddr) -> Result<String, LookupError> {
        self.reverse
            .get(&address)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(address.to_string()))
    }
}

/// 测试上下文（真实 Route 53 账号）
pub struct TestContext {
    pub provider: Arc<dyn DnsRecordProvider>,
    /// 正向区域，如 "example.com"
    pub forward_zone: String,
    /// IPv4 反向区域，如 "2.1.10.in-addr.arpa"
    pub reverse_zone: String,
}

impl TestContext {
    /// 从环境变量创建测试上下文
    pub fn from_env() -> Option<Self> {
        let settings = Route53Settings::from_env().ok()?;
        let provider = create_provider(settings).ok()?;

        Some(Self {
            provider,
            forward_zone: names::normalize_domain_name(&env::var("AWS_FORWARD_ZONE").ok()?),
            reverse_zone: names::normalize_domain_name(&env::var("AWS_REVERSE_V4_ZONE").ok()?),
        })
    }

    /// 正向区域下的唯一主机名
    pub fn hostname(&self) -> String {
        format!("{}.{}", generate_test_record_name(), self.forward_zone)
    }
}
