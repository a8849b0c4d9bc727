//! DNS 名称处理工具
//!
//! 所有比较均忽略大小写与末尾的点。

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const IN_ADDR_ARPA: &str = "in-addr.arpa";
const IP6_ARPA: &str = "ip6.arpa";

/// 补全末尾的点（完全限定名）
pub fn ensure_trailing_dot(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// 去掉末尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// 比较两个域名是否相同（忽略大小写与末尾的点）
pub fn names_equal(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}

/// 按点拆分标签，忽略末尾的点产生的空标签
pub fn labels(name: &str) -> Vec<&str> {
    let trimmed = name.trim_end_matches('.');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('.').collect()
}

/// 由地址生成反向解析名称
/// 如: 10.1.2.3 -> "3.2.1.10.in-addr.arpa."
pub fn reverse_name(address: IpAddr) -> String {
    match address {
        IpAddr::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{d}.{c}.{b}.{a}.{IN_ADDR_ARPA}.")
        }
        IpAddr::V6(v6) => {
            let hex = format!("{:032x}", u128::from(v6));
            let mut name: String = hex.chars().rev().fold(String::new(), |mut acc, c| {
                acc.push(c);
                acc.push('.');
                acc
            });
            name.push_str(IP6_ARPA);
            name.push('.');
            name
        }
    }
}

/// 由完整的反向解析名称还原地址（非完整名称返回 `None`）
/// 如: "3.2.1.10.in-addr.arpa." -> 10.1.2.3
pub fn address_from_reverse_name(name: &str) -> Option<IpAddr> {
    let lower = normalize_domain_name(name).to_ascii_lowercase();

    if let Some(prefix) = lower.strip_suffix(&format!(".{IN_ADDR_ARPA}")) {
        let octets: Vec<u8> = prefix
            .split('.')
            .map(str::parse::<u8>)
            .collect::<Result<_, _>>()
            .ok()?;
        let [d, c, b, a] = <[u8; 4]>::try_from(octets).ok()?;
        return Some(IpAddr::V4(Ipv4Addr::new(a, b, c, d)));
    }

    if let Some(prefix) = lower.strip_suffix(&format!(".{IP6_ARPA}")) {
        let nibbles: Vec<&str> = prefix.split('.').collect();
        if nibbles.len() != 32 || nibbles.iter().any(|n| n.len() != 1) {
            return None;
        }
        let hex: String = nibbles.iter().rev().copied().collect();
        let value = u128::from_str_radix(&hex, 16).ok()?;
        return Some(IpAddr::V6(Ipv6Addr::from(value)));
    }

    None
}
