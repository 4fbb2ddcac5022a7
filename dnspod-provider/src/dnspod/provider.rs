//! `DNSPod` record trait 实现
//!
//! Every operation resolves the zone, then works strictly sequentially. A failed
//! call stops the batch; records already handled are returned in the
//! [`BatchError`].

use async_trait::async_trait;

use crate::error::{BatchError, BatchResult, ProviderError, Result};
use crate::traits::{RecordAppender, RecordDeleter, RecordGetter, RecordSetter};
use crate::types::{Record, Rr};

use super::convert::{from_record, to_record};
use super::{DnspodProvider, DnspodRecord, PROVIDER};

/// First existing record whose projection matches `target` on name, type and data.
fn find_exact<'a>(
    existing: &'a [DnspodRecord],
    zone: &str,
    target: &Rr,
) -> Option<&'a DnspodRecord> {
    existing.iter().find(|rec| {
        let rr = to_record(rec, zone).rr();
        rr.name == target.name && rr.record_type == target.record_type && rr.data == target.data
    })
}

/// First existing record whose projection matches `target` on name and type.
///
/// Data is ignored, so with several records sharing name and type only the
/// first one listed is ever selected.
fn find_by_name_and_type<'a>(
    existing: &'a [DnspodRecord],
    zone: &str,
    target: &Rr,
) -> Option<&'a DnspodRecord> {
    existing.iter().find(|rec| {
        let rr = to_record(rec, zone).rr();
        rr.name == target.name && rr.record_type == target.record_type
    })
}

/// Logs the failure and packs the records completed so far into a [`BatchError`].
fn abort(
    completed: Vec<Record>,
    action: &str,
    record: &Record,
    err: ProviderError,
) -> BatchError {
    if err.is_expected() {
        log::warn!("[{PROVIDER}] {action} {} failed: {err}", record.name());
    } else {
        log::error!("[{PROVIDER}] {action} {} failed: {err}", record.name());
    }
    BatchError::new(completed, err)
}

impl DnspodProvider {
    /// Resolves the zone and lists its records once for a whole batch.
    async fn zone_snapshot(&self, zone: &str) -> Result<(String, Vec<DnspodRecord>)> {
        let domain_id = self.resolve_domain_id(zone).await?;
        let existing = self.list_records(&domain_id).await?;
        Ok((domain_id, existing))
    }
}

#[async_trait]
impl RecordGetter for DnspodProvider {
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        let (_, existing) = self.zone_snapshot(zone).await?;
        Ok(existing.iter().map(|rec| to_record(rec, zone)).collect())
    }
}

#[async_trait]
impl RecordAppender for DnspodProvider {
    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let domain_id = self.resolve_domain_id(zone).await?;
        let mut appended = Vec::with_capacity(records.len());

        for record in records {
            let wire = from_record(record, zone);
            match self.create_record(&domain_id, &wire).await {
                Ok(created) => {
                    log::info!(
                        "[{PROVIDER}] Created {} {} (id {})",
                        record.record_type(),
                        record.name(),
                        created.id
                    );
                    appended.push(to_record(&created, zone));
                }
                Err(e) => return Err(abort(appended, "Record.Create", record, e)),
            }
        }

        Ok(appended)
    }
}

#[async_trait]
impl RecordSetter for DnspodProvider {
    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let (domain_id, existing) = self.zone_snapshot(zone).await?;
        let mut results = Vec::with_capacity(records.len());

        for record in records {
            let wire = from_record(record, zone);

            let outcome = match find_by_name_and_type(&existing, zone, &record.rr()) {
                Some(current) => {
                    let result = self.modify_record(&domain_id, &current.id, &wire).await;
                    (result, "Record.Modify")
                }
                None => (self.create_record(&domain_id, &wire).await, "Record.Create"),
            };

            match outcome {
                (Ok(saved), action) => {
                    log::info!(
                        "[{PROVIDER}] {action} {} {} (id {})",
                        record.record_type(),
                        record.name(),
                        saved.id
                    );
                    results.push(to_record(&saved, zone));
                }
                (Err(e), action) => return Err(abort(results, action, record, e)),
            }
        }

        Ok(results)
    }
}

#[async_trait]
impl RecordDeleter for DnspodProvider {
    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let (domain_id, existing) = self.zone_snapshot(zone).await?;
        let mut deleted = Vec::with_capacity(records.len());

        for record in records {
            let target = record.rr();

            let Some(current) = find_exact(&existing, zone, &target) else {
                let err = ProviderError::RecordNotFound {
                    provider: PROVIDER.to_string(),
                    name: target.name,
                    record_type: target.record_type,
                    data: target.data,
                };
                return Err(abort(deleted, "Record.Remove", record, err));
            };

            if let Err(e) = self.remove_record(&domain_id, &current.id).await {
                return Err(abort(deleted, "Record.Remove", record, e));
            }

            log::info!(
                "[{PROVIDER}] Removed {} {} (id {})",
                target.record_type,
                target.name,
                current.id
            );
            deleted.push(record.clone());
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::types::{Address, Txt};

    const ZONE: &str = "example.com.";

    fn wire(id: &str, name: &str, record_type: &str, value: &str) -> DnspodRecord {
        DnspodRecord {
            id: id.to_string(),
            name: name.to_string(),
            record_type: record_type.to_string(),
            value: value.to_string(),
            ttl: "600".to_string(),
            ..DnspodRecord::default()
        }
    }

    fn txt(name: &str, text: &str) -> Rr {
        Record::Txt(Txt {
            name: name.to_string(),
            text: text.to_string(),
            ttl: Duration::from_secs(600),
        })
        .rr()
    }

    #[test]
    fn exact_match_requires_data() {
        let existing = vec![
            wire("1", "_acme-challenge", "TXT", "old"),
            wire("2", "_acme-challenge", "TXT", "new"),
        ];
        let hit = find_exact(&existing, ZONE, &txt("_acme-challenge.example.com.", "new"));
        assert_eq!(hit.map(|r| r.id.as_str()), Some("2"));

        let miss = find_exact(&existing, ZONE, &txt("_acme-challenge.example.com.", "other"));
        assert!(miss.is_none());
    }

    #[test]
    fn exact_match_ignores_ttl() {
        let mut rec = wire("1", "www", "TXT", "hello");
        rec.ttl = "60".to_string();
        assert!(find_exact(&[rec], ZONE, &txt("www.example.com.", "hello")).is_some());
    }

    #[test]
    fn name_and_type_match_takes_first() {
        let existing = vec![
            wire("10", "www", "A", "192.0.2.1"),
            wire("11", "www", "A", "192.0.2.2"),
        ];
        let target = Record::Address(Address {
            name: "www.example.com.".to_string(),
            ip: "192.0.2.99".parse().unwrap(),
            ttl: Duration::from_secs(300),
        })
        .rr();
        let hit = find_by_name_and_type(&existing, ZONE, &target);
        assert_eq!(hit.map(|r| r.id.as_str()), Some("10"));
    }

    #[test]
    fn name_and_type_match_distinguishes_family() {
        let existing = vec![wire("10", "www", "AAAA", "2001:db8::1")];
        let target = Record::Address(Address {
            name: "www.example.com.".to_string(),
            ip: "192.0.2.1".parse().unwrap(),
            ttl: Duration::from_secs(300),
        })
        .rr();
        assert!(find_by_name_and_type(&existing, ZONE, &target).is_none());
    }
}
