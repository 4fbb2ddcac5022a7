//! `DNSPod` API type definition
//!
//! Every scalar is carried as a string. The API mixes JSON numbers and strings
//! for the same fields, so they are read through [`lenient`](crate::utils::lenient).

use serde::Deserialize;

use crate::utils::lenient;

// ============ Response envelope ============

/// Status block present in every response.
#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: String,
}

/// Common response envelope, checked before any endpoint payload is parsed.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub status: ApiStatus,
}

// ============ Domains ============

/// Response payload for `Domain.List`.
#[derive(Debug, Deserialize)]
pub struct DomainListResponse {
    pub info: Option<DomainListInfo>,
    pub domains: Option<Vec<DnspodDomain>>,
}

#[derive(Debug, Deserialize)]
pub struct DomainListInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub domain_total: String,
}

/// Domain item returned by `Domain.List`.
#[derive(Debug, Clone, Deserialize)]
pub struct DnspodDomain {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
}

// ============ Records ============

/// Response payload for `Record.List`.
#[derive(Debug, Deserialize)]
pub struct RecordListResponse {
    pub info: Option<RecordListInfo>,
    pub records: Option<Vec<DnspodRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct RecordListInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub sub_domains: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub record_total: String,
}

/// Response payload for `Record.Create` and `Record.Modify`.
///
/// The echoed record is partial (typically `id`, `name`, `status`, sometimes `value`).
#[derive(Debug, Deserialize)]
pub struct RecordResponse {
    pub record: DnspodRecord,
}

/// DNS record in the provider's flat representation.
///
/// `name` is relative to the domain (`"www"`, or `"@"` for the apex).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DnspodRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ttl: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub value: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub enabled: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub updated_on: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub line: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub line_id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub record_type: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub mx: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub remark: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_list_mixed_scalar_types() {
        let json = r#"{
            "status": {"code": "1", "message": "Action completed successful", "created_at": "2024-01-01 00:00:00"},
            "info": {"sub_domains": "2", "record_total": "2"},
            "records": [
                {"id": "16894439", "ttl": "600", "value": "192.0.2.1", "enabled": "1",
                 "status": "enabled", "updated_on": "2024-01-01 00:00:00", "name": "@",
                 "line": "默认", "line_id": "0", "type": "A", "weight": null, "mx": "0", "remark": ""},
                {"id": 16894440, "ttl": 300, "value": "mail.example.com.", "enabled": 1,
                 "name": "@", "type": "MX", "mx": 10}
            ]
        }"#;

        let resp: RecordListResponse = serde_json::from_str(json).unwrap();
        let records = resp.records.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "16894439");
        assert_eq!(records[0].line, "默认");
        assert_eq!(records[0].weight, None);
        assert_eq!(records[1].id, "16894440");
        assert_eq!(records[1].ttl, "300");
        assert_eq!(records[1].mx.as_deref(), Some("10"));
        assert_eq!(records[1].record_type, "MX");
    }

    #[test]
    fn domain_id_may_be_numeric() {
        let json = r#"{"domains": [{"id": 2059079, "name": "example.com", "status": "enable"}]}"#;
        let resp: DomainListResponse = serde_json::from_str(json).unwrap();
        let domains = resp.domains.unwrap();
        assert_eq!(domains[0].id, "2059079");
        assert_eq!(domains[0].name, "example.com");
    }

    #[test]
    fn envelope_ignores_payload() {
        let json = r#"{"status": {"code": "-1", "message": "登录失败"}, "records": "garbage"}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status.code, "-1");
        assert_eq!(envelope.status.message, "登录失败");
    }

    #[test]
    fn envelope_requires_status() {
        let result: Result<Envelope, _> = serde_json::from_str(r#"{"records": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn partial_create_response() {
        let json = r#"{"status": {"code": "1"}, "record": {"id": "16894439", "name": "test", "status": "enabled"}}"#;
        let resp: RecordResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.record.id, "16894439");
        assert_eq!(resp.record.name, "test");
        assert!(resp.record.value.is_empty());
        assert_eq!(resp.record.mx, None);
    }
}
