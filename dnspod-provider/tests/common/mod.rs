//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dnspod_provider::{DnspodProvider, Record, Txt};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// 测试用区域
pub const ZONE: &str = "example.com";
/// 测试用域名 ID
pub const DOMAIN_ID: &str = "2059079";

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

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

// ============ Mock server ============

/// 指向 mock server 的 Provider
pub fn mock_provider(server: &MockServer) -> DnspodProvider {
    DnspodProvider::builder("12345,test-token")
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("mock provider")
}

/// 成功信封 + 额外字段
pub fn ok_body(payload: Value) -> Value {
    let mut body = json!({
        "status": {
            "code": "1",
            "message": "Action completed successful",
            "created_at": "2024-05-01 12:00:00"
        }
    });
    if let (Some(body), Value::Object(extra)) = (body.as_object_mut(), payload) {
        body.extend(extra);
    }
    body
}

/// 失败信封
pub fn error_body(code: &str, message: &str) -> Value {
    json!({
        "status": {
            "code": code,
            "message": message,
            "created_at": "2024-05-01 12:00:00"
        }
    })
}

/// 匹配某个接口的 POST 请求
pub fn endpoint(name: &str) -> MockBuilder {
    Mock::given(method("POST")).and(path(format!("/{name}")))
}

/// HTTP 200 + JSON 响应
pub fn json_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// 以 JSON 响应某个接口
pub fn respond(name: &str, body: Value) -> Mock {
    endpoint(name).respond_with(json_response(body))
}

/// `Domain.List` 返回 example.com 和另一个域名
pub fn domain_list() -> Mock {
    respond(
        "Domain.List",
        ok_body(json!({
            "info": {"domain_total": 2},
            "domains": [
                {"id": 1000001, "name": "other.org", "status": "enable"},
                {"id": 2059079, "name": "example.com", "status": "enable"}
            ]
        })),
    )
}

/// 提供商格式的记录
pub fn wire_record(id: &str, name: &str, record_type: &str, value: &str, ttl: &str) -> Value {
    json!({
        "id": id,
        "ttl": ttl,
        "value": value,
        "enabled": "1",
        "status": "enabled",
        "updated_on": "2024-05-01 12:00:00",
        "name": name,
        "line": "默认",
        "line_id": "0",
        "type": record_type,
        "weight": null,
        "mx": "0",
        "remark": ""
    })
}

/// `Record.List` 返回给定记录
pub fn record_list(records: Vec<Value>) -> Mock {
    let total = records.len();
    respond(
        "Record.List",
        ok_body(json!({
            "info": {"sub_domains": total.to_string(), "record_total": total.to_string()},
            "records": records
        })),
    )
}

/// `Record.Create` / `Record.Modify` 的部分回显
pub fn echoed(id: &str, name: &str) -> Value {
    ok_body(json!({
        "record": {"id": id, "name": name, "status": "enabled"}
    }))
}

pub fn txt(name: &str, text: &str, ttl_secs: u64) -> Record {
    Record::Txt(Txt {
        name: name.to_string(),
        text: text.to_string(),
        ttl: Duration::from_secs(ttl_secs),
    })
}

// ============ Live API ============

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("_test-{nanos:08x}")
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: DnspodProvider,
    pub zone: String,
}

impl TestContext {
    /// 创建 `DNSPod` 测试上下文
    pub fn dnspod() -> Option<Self> {
        let login_token = env::var("DNSPOD_TOKEN").ok()?;
        let zone = env::var("TEST_DOMAIN").ok()?;
        let provider = DnspodProvider::new(login_token).ok()?;

        Some(Self { provider, zone })
    }

    /// 测试记录的完整名称
    pub fn fqdn(&self, relative: &str) -> String {
        format!("{relative}.{}.", self.zone.trim_end_matches('.'))
    }
}
