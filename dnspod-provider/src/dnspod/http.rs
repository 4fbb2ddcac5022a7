//! `DNSPod` HTTP 请求方法

use std::collections::BTreeMap;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::redact_login_token;

use super::{DnspodProvider, Envelope, PROVIDER, SUCCESS_CODE};

impl DnspodProvider {
    /// 执行一次 API 调用，返回已通过状态码校验的原始响应体
    ///
    /// 公共参数（`login_token`、`format`、`error_on_empty`、`lang`）会覆盖调用方传入的同名参数。
    /// 信封中的 `status.code` 不为 `"1"` 时返回 [`ProviderError::ApiError`]，
    /// 此时不会再解析具体接口的数据。
    pub(crate) async fn call(
        &self,
        action: &str,
        mut params: BTreeMap<&'static str, String>,
    ) -> Result<String> {
        // 1. 合并公共参数
        params.insert("login_token", self.login_token.clone());
        params.insert("format", "json".to_string());
        params.insert("error_on_empty", "no".to_string());
        params.insert("lang", "cn".to_string());

        let body = HttpUtils::form_encode(&params);
        log::debug!("[{PROVIDER}] Request Body: {}", redact_login_token(&body));

        // 2. 发送请求
        let url = format!("{}/{action}", self.base_url);
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(USER_AGENT, &self.user_agent)
            .body(body);

        let (_status, response_text) =
            HttpUtils::execute_request(request, PROVIDER, "POST", action).await?;

        // 3. 校验信封状态
        let envelope: Envelope = HttpUtils::parse_json(&response_text, PROVIDER)?;
        if envelope.status.code != SUCCESS_CODE {
            log::warn!(
                "[{PROVIDER}] {action} failed: {} - {}",
                envelope.status.code,
                envelope.status.message
            );
            return Err(ProviderError::ApiError {
                provider: PROVIDER.to_string(),
                raw_code: envelope.status.code,
                raw_message: envelope.status.message,
            });
        }

        Ok(response_text)
    }
}
