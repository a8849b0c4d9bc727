//! Route 53 错误映射
//!
//! 参考: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
//!
//! ## 错误码分类
//!
//! - **认证错误**：InvalidClientTokenId, SignatureDoesNotMatch, IncompleteSignature,
//!   MissingAuthenticationToken, ExpiredToken, InvalidSignatureException
//! - **权限拒绝**：AccessDenied, AccessDeniedException
//! - **频率限制**：Throttling, ThrottlingException, PriorRequestNotComplete
//! - **区域不存在**：NoSuchHostedZone
//! - **参数错误**：InvalidInput, InvalidDomainName
//!
//! 其余错误码（含 `InvalidChangeBatch`）fallback 到 `RemoteApiError`。

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Client;

/// Route 53 错误码映射实现
impl ProviderErrorMapper for Route53Client {
    fn provider_name(&self) -> &'static str {
        crate::PROVIDER_ID
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "ExpiredToken"
                | "InvalidSignatureException",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 权限拒绝 ============
            Some("AccessDenied" | "AccessDeniedException") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 频率限制 ============
            Some("Throttling" | "ThrottlingException" | "PriorRequestNotComplete") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ 区域不存在 ============
            Some("NoSuchHostedZone") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                name: context.zone.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 参数无效 ============
            Some("InvalidInput" | "InvalidDomainName") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: context.zone.unwrap_or_else(|| "request".to_string()),
                detail: raw.message,
            },

            // ============ 其他 ============
            _ => self.remote_error(raw),
        }
    }
}
