//! `DNSPod` Provider (legacy `dnsapi.cn` API, login-token authentication)

mod api;
mod convert;
mod http;
mod provider;
mod resolver;
mod types;

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::error::{ProviderError, Result};
use crate::traits::{RecordAppender, RecordDeleter, RecordGetter, RecordManager, RecordSetter};

pub(crate) use types::{
    DnspodDomain, DnspodRecord, DomainListResponse, Envelope, RecordListResponse, RecordResponse,
};

pub(crate) const PROVIDER: &str = "dnspod";
pub(crate) const DNSPOD_API_BASE: &str = "https://dnsapi.cn";
/// 响应信封中表示成功的状态码
pub(crate) const SUCCESS_CODE: &str = "1";
/// 默认线路
pub(crate) const DEFAULT_RECORD_LINE: &str = "默认";
/// 未指定 TTL 时创建记录使用的 TTL（秒）
pub(crate) const DEFAULT_TTL: &str = "600";

/// 默认连接超时
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// 默认请求超时
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// API 要求的 User-Agent 格式：程序名/版本 (联系方式)
const DEFAULT_USER_AGENT: &str = concat!(
    "dnspod-provider/",
    env!("CARGO_PKG_VERSION"),
    " (github.com/r6c/dnspodGlobal)"
);

/// `DNSPod` Provider
///
/// Holds the HTTP client, the login token and the per-instance domain cache.
/// The cache is filled by the first successful `Domain.List` call and never
/// refreshed, so domains added to the account later are not visible to this
/// instance.
pub struct DnspodProvider {
    pub(crate) client: Client,
    pub(crate) login_token: String,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    pub(crate) domains: RwLock<Vec<DnspodDomain>>,
}

impl fmt::Debug for DnspodProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnspodProvider")
            .field("login_token", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Provider configuration, suitable for embedding in a caller's config file.
///
/// ```toml
/// login_token = "12345,0123456789abcdef0123456789abcdef"
/// ```
#[derive(Clone, Deserialize)]
pub struct DnspodConfig {
    /// API credential in the form `"<id>,<token>"`.
    pub login_token: String,
}

impl fmt::Debug for DnspodConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnspodConfig")
            .field("login_token", &"<REDACTED>")
            .finish()
    }
}

/// `DNSPod` Provider Builder
pub struct DnspodProviderBuilder {
    login_token: String,
    base_url: String,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: String,
}

impl DnspodProviderBuilder {
    fn new(login_token: String) -> Self {
        Self {
            login_token,
            base_url: DNSPOD_API_BASE.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Overrides the API endpoint (mock servers, proxies).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overall per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Identifying client signature, `name/version (contact)`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the provider.
    ///
    /// # Errors
    /// [`ProviderError::InvalidConfig`] when the login token is empty or the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<DnspodProvider> {
        if self.login_token.trim().is_empty() {
            return Err(ProviderError::InvalidConfig {
                provider: PROVIDER.to_string(),
                detail: "login_token must not be empty".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .build()
            .map_err(|e| ProviderError::InvalidConfig {
                provider: PROVIDER.to_string(),
                detail: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(DnspodProvider {
            client,
            login_token: self.login_token,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            user_agent: self.user_agent,
            domains: RwLock::new(Vec::new()),
        })
    }
}

impl DnspodProvider {
    /// Creates a provider with default settings.
    ///
    /// # Errors
    /// See [`DnspodProviderBuilder::build`].
    pub fn new(login_token: impl Into<String>) -> Result<Self> {
        Self::builder(login_token).build()
    }

    /// Creates a provider from a deserialized [`DnspodConfig`].
    ///
    /// # Errors
    /// See [`DnspodProviderBuilder::build`].
    pub fn from_config(config: &DnspodConfig) -> Result<Self> {
        Self::new(config.login_token.clone())
    }

    pub fn builder(login_token: impl Into<String>) -> DnspodProviderBuilder {
        DnspodProviderBuilder::new(login_token.into())
    }
}

// Interface guards
const _: () = {
    const fn implements<T>()
    where
        T: RecordGetter + RecordAppender + RecordSetter + RecordDeleter + RecordManager,
    {
    }
    implements::<DnspodProvider>();
};
