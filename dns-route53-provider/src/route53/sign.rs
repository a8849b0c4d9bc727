//! AWS Signature Version 4

use std::fmt::Write;

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::utils::log_sanitizer::truncate_for_log;

use super::{Route53Client, SERVICE};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Parts of a request that enter the signature.
pub(crate) struct CanonicalRequest<'a> {
    pub method: &'a str,
    pub uri: &'a str,
    /// `k=v` pairs joined by `&`, already percent-encoded.
    pub query: &'a str,
    pub headers: &'a [(String, String)],
    pub payload: &'a str,
}

/// HMAC-SHA256 计算
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC 接受任意长度的 key，new_from_slice 不会失败
    let Ok(mut mac) = HmacSha256::new_from_slice(key) else {
        return Vec::new();
    };
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Builds a query string in canonical form: RFC 3986 encoded, sorted by key.
pub(crate) fn canonical_query(params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    encoded.sort_unstable();
    encoded.join("&")
}

/// Computes the `Authorization` header value.
///
/// `timestamp` is the `X-Amz-Date` value (`%Y%m%dT%H%M%SZ`).
/// Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html>
pub(crate) fn sign_v4(
    access_key_id: &str,
    secret_access_key: &str,
    region: &str,
    service: &str,
    request: &CanonicalRequest<'_>,
    timestamp: &str,
) -> String {
    let date = timestamp.get(..8).unwrap_or(timestamp);

    // 1. Query String sorting (in ascending order by parameter name)
    let canonical_query = if request.query.is_empty() {
        String::new()
    } else {
        let mut params: Vec<&str> = request.query.split('&').collect();
        params.sort_unstable();
        params.join("&")
    };

    // 2. Canonical headers: lowercase names, trimmed values, sorted
    let mut sorted_headers: Vec<_> = request.headers.iter().collect();
    sorted_headers.sort_by_key(|(k, _)| k.to_lowercase());

    let canonical_headers: String =
        sorted_headers
            .iter()
            .fold(String::new(), |mut acc, (k, v)| {
                let _ = writeln!(acc, "{}:{}", k.to_lowercase(), v.trim());
                acc
            });

    let signed_headers: String = sorted_headers
        .iter()
        .map(|(k, _)| k.to_lowercase())
        .collect::<Vec<_>>()
        .join(";");

    // 3. Canonical request
    let hashed_payload = hex::encode(Sha256::digest(request.payload.as_bytes()));
    let canonical_request = format!(
        "{}\n{}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}",
        request.method, request.uri
    );

    log::debug!("CanonicalRequest:\n{}", truncate_for_log(&canonical_request));

    // 4. String to sign
    let credential_scope = format!("{date}/{region}/{service}/aws4_request");
    let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
    let string_to_sign =
        format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{hashed_canonical_request}");

    log::debug!("StringToSign:\n{string_to_sign}");

    // 5. Derived signing key
    let k_date = hmac_sha256(
        format!("AWS4{secret_access_key}").as_bytes(),
        date.as_bytes(),
    );
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    let k_signing = hmac_sha256(&k_service, b"aws4_request");
    let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes()));

    format!(
        "{ALGORITHM} Credential={access_key_id}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

impl Route53Client {
    /// Signs a request against this client's credentials and region.
    pub(crate) fn sign(&self, request: &CanonicalRequest<'_>, timestamp: &str) -> String {
        sign_v4(
            &self.access_key_id,
            &self.secret_access_key,
            &self.region,
            SERVICE,
            request,
            timestamp,
        )
    }
}
