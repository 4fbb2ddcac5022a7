//! `DNSPod` endpoint wrappers

use std::collections::BTreeMap;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::convert::merge_echoed;
use super::{
    DEFAULT_RECORD_LINE, DEFAULT_TTL, DnspodDomain, DnspodProvider, DnspodRecord,
    DomainListResponse, PROVIDER, RecordListResponse, RecordResponse,
};

/// Parameters shared by `Record.Create` and `Record.Modify`.
fn record_params(domain_id: &str, record: &DnspodRecord) -> BTreeMap<&'static str, String> {
    let mut params = BTreeMap::new();
    params.insert("domain_id", domain_id.to_string());
    params.insert("sub_domain", record.name.clone());
    params.insert("record_type", record.record_type.clone());
    params.insert("record_line", DEFAULT_RECORD_LINE.to_string());
    params.insert("value", record.value.clone());
    if let Some(mx) = record.mx.as_deref().filter(|mx| !mx.is_empty()) {
        params.insert("mx", mx.to_string());
    }
    params
}

/// TTL is considered unset when empty or zero.
fn ttl_is_set(ttl: &str) -> bool {
    !ttl.is_empty() && ttl != "0"
}

impl DnspodProvider {
    /// `Domain.List`
    pub(crate) async fn list_domains(&self) -> Result<Vec<DnspodDomain>> {
        let body = self.call("Domain.List", BTreeMap::new()).await?;
        let resp: DomainListResponse = HttpUtils::parse_json(&body, PROVIDER)?;

        if let Some(info) = &resp.info {
            log::debug!("[{PROVIDER}] Domain.List total: {}", info.domain_total);
        }

        Ok(resp.domains.unwrap_or_default())
    }

    /// `Record.List`, single call without paging.
    pub(crate) async fn list_records(&self, domain_id: &str) -> Result<Vec<DnspodRecord>> {
        let mut params = BTreeMap::new();
        params.insert("domain_id", domain_id.to_string());

        let body = self.call("Record.List", params).await?;
        let resp: RecordListResponse = HttpUtils::parse_json(&body, PROVIDER)?;

        if let Some(info) = &resp.info {
            log::debug!(
                "[{PROVIDER}] Record.List domain {domain_id}: {} records, {} sub domains",
                info.record_total,
                info.sub_domains
            );
        }

        Ok(resp.records.unwrap_or_default())
    }

    /// `Record.Create`; returns the submitted record completed with the echoed fields.
    pub(crate) async fn create_record(
        &self,
        domain_id: &str,
        record: &DnspodRecord,
    ) -> Result<DnspodRecord> {
        let mut params = record_params(domain_id, record);
        let ttl = if ttl_is_set(&record.ttl) {
            record.ttl.clone()
        } else {
            DEFAULT_TTL.to_string()
        };
        params.insert("ttl", ttl.clone());

        let body = self.call("Record.Create", params).await?;
        let resp: RecordResponse = HttpUtils::parse_json(&body, PROVIDER)?;

        let submitted = DnspodRecord {
            ttl,
            ..record.clone()
        };
        Ok(merge_echoed(submitted, resp.record))
    }

    /// `Record.Modify`; TTL is only sent when set.
    pub(crate) async fn modify_record(
        &self,
        domain_id: &str,
        record_id: &str,
        record: &DnspodRecord,
    ) -> Result<DnspodRecord> {
        let mut params = record_params(domain_id, record);
        params.insert("record_id", record_id.to_string());
        if ttl_is_set(&record.ttl) {
            params.insert("ttl", record.ttl.clone());
        }

        let body = self.call("Record.Modify", params).await?;
        let resp: RecordResponse = HttpUtils::parse_json(&body, PROVIDER)?;

        let submitted = DnspodRecord {
            id: record_id.to_string(),
            ..record.clone()
        };
        Ok(merge_echoed(submitted, resp.record))
    }

    /// `Record.Remove`
    pub(crate) async fn remove_record(&self, domain_id: &str, record_id: &str) -> Result<()> {
        let mut params = BTreeMap::new();
        params.insert("domain_id", domain_id.to_string());
        params.insert("record_id", record_id.to_string());

        self.call("Record.Remove", params).await?;
        Ok(())
    }
}
