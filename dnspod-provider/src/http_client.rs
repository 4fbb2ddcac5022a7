//! Generic HTTP client tools
//!
//! Reusable request execution and response parsing, kept apart from the provider so the
//! provider code only deals with endpoints and payloads.
//!
//! # design principles
//! - **Single shot** - one request, one outcome; nothing here retries or backs off
//! - **Status first** - a non-2xx status is reported before the body is looked at
//! - **Distinct parse failures** - malformed bodies surface as `ParseError`, never as transport errors

use std::collections::BTreeMap;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name (for logging)
    /// * `url_or_action` - URL or action name (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any 2xx response
    /// * `Err(ProviderError::Timeout)` - the client timeout elapsed
    /// * `Err(ProviderError::NetworkError)` - the request could not be sent or the body read
    /// * `Err(ProviderError::HttpError)` - non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] HTTP error {status_code} for {url_or_action}");
            return Err(ProviderError::HttpError {
                provider: provider_name.to_string(),
                status: status_code,
                detail: truncate_for_log(&body),
            });
        }

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Encode parameters as an `application/x-www-form-urlencoded` body.
    ///
    /// Keys come out in sorted order so identical parameter sets always produce the
    /// same body.
    pub fn form_encode(params: &BTreeMap<&str, String>) -> String {
        params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
