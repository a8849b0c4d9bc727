//! Route 53 HTTP 请求方法

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::ChangeResponse;

use super::Route53Client;
use super::sign::{CanonicalRequest, canonical_query};
use super::types::{ChangeResourceRecordSetsResponse, ErrorResponse};

impl Route53Client {
    // ==================== 辅助方法 ====================

    /// 提取错误码和消息（`ErrorResponse` 或 `InvalidChangeBatch`）
    fn extract_error(response_text: &str) -> (Option<String>, Option<String>) {
        if let Ok(ErrorResponse {
            error: Some(detail),
        }) = quick_xml::de::from_str::<ErrorResponse>(response_text)
        {
            return (detail.code, detail.message);
        }

        if let Ok(batch) = quick_xml::de::from_str::<super::types::InvalidChangeBatch>(response_text)
            && let Some(messages) = batch.messages
        {
            return (
                Some("InvalidChangeBatch".to_string()),
                Some(messages.items.join("; ")),
            );
        }

        (None, None)
    }

    /// 统一处理 Route 53 响应错误
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if HttpUtils::is_success(status) {
            return Ok(());
        }

        // 尝试解析结构化错误
        if let (Some(code), message) = Self::extract_error(response_text) {
            return Err(self.map_error(
                RawApiError::with_code(code, message.unwrap_or_default()),
                ctx,
            ));
        }

        // 回退到通用错误
        Err(self.remote_error(RawApiError::new(format!("HTTP {status}: {response_text}"))))
    }

    /// Current `X-Amz-Date` value.
    fn timestamp() -> String {
        Utc::now().format("%Y%m%dT%H%M%SZ").to_string()
    }

    // ==================== API 方法 ====================

    /// 执行已签名的 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        ctx: ErrorContext,
    ) -> Result<T> {
        let timestamp = Self::timestamp();
        let query = canonical_query(params);

        let headers = vec![
            ("Host".to_string(), self.host.clone()),
            ("X-Amz-Date".to_string(), timestamp.clone()),
        ];

        let authorization = self.sign(
            &CanonicalRequest {
                method: "GET",
                uri: path,
                query: &query,
                headers: &headers,
                payload: "",
            },
            &timestamp,
        );

        let url = if query.is_empty() {
            format!("{}{path}", self.endpoint)
        } else {
            format!("{}{path}?{query}", self.endpoint)
        };

        let request = self
            .client
            .get(&url)
            .header("Host", &self.host)
            .header("X-Amz-Date", &timestamp)
            .header("Authorization", authorization);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_xml(&response_text, self.provider_name())
    }

    /// 提交 `ChangeResourceRecordSets` 请求
    ///
    /// API 拒绝变更时返回 [`ChangeResponse::rejected`]，并原样保留响应体；
    /// 仅传输/序列化/解析失败返回 `Err`。
    pub(crate) async fn post_change<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ChangeResponse> {
        let payload =
            quick_xml::se::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        log::debug!("Request Body: {payload}");

        let timestamp = Self::timestamp();

        let headers = vec![
            ("Host".to_string(), self.host.clone()),
            ("X-Amz-Date".to_string(), timestamp.clone()),
            ("Content-Type".to_string(), "text/xml".to_string()),
        ];

        let authorization = self.sign(
            &CanonicalRequest {
                method: "POST",
                uri: path,
                query: "",
                headers: &headers,
                payload: &payload,
            },
            &timestamp,
        );
        let url = format!("{}{path}", self.endpoint);

        let request = self
            .client
            .post(&url)
            .header("Host", &self.host)
            .header("X-Amz-Date", &timestamp)
            .header("Content-Type", "text/xml")
            .header("Authorization", authorization)
            .body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        if !HttpUtils::is_success(status) {
            let (code, _) = Self::extract_error(&response_text);
            return Ok(ChangeResponse::rejected(code, response_text));
        }

        let response: ChangeResourceRecordSetsResponse =
            HttpUtils::parse_xml(&response_text, self.provider_name())?;
        Ok(ChangeResponse::accepted(format!(
            "{} {}",
            response.change_info.id, response.change_info.status
        )))
    }
}
