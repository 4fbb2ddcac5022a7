//! Record translation between the uniform model and `DNSPod`'s flat records.

use std::net::IpAddr;
use std::time::Duration;

use crate::types::{Address, Cname, Mx, Record, Rr, Txt, address_type};

use super::{DnspodRecord, PROVIDER};

/// Strips a single trailing dot.
fn trim_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// 将完整域名转换为相对名称
/// 如: "www.example.com." + "example.com" -> "www"
/// 如: "example.com." + "example.com" -> "@"
///
/// Names outside the zone pass through without their trailing dot.
pub(crate) fn relative_name(name: &str, zone: &str) -> String {
    let name = trim_dot(name);
    let zone = trim_dot(zone);

    if name == zone {
        "@".to_string()
    } else if let Some(sub) = name.strip_suffix(&format!(".{zone}")) {
        sub.to_string()
    } else {
        name.to_string()
    }
}

/// 将相对名称转换为以点结尾的完整域名
/// 如: "www" + "example.com" -> "www.example.com."
/// 如: "@" / "" + "example.com" -> "example.com."
pub(crate) fn absolute_name(name: &str, zone: &str) -> String {
    let zone = trim_dot(zone);

    if name == "@" || name.is_empty() {
        format!("{zone}.")
    } else if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.{zone}.")
    }
}

/// Converts a provider record to the uniform model.
///
/// Never fails: an address record whose value is not an IP literal becomes a
/// generic [`Rr`] carrying the raw value, and an unparsable TTL becomes zero.
pub(crate) fn to_record(record: &DnspodRecord, zone: &str) -> Record {
    let name = absolute_name(&record.name, zone);
    let ttl = Duration::from_secs(record.ttl.trim().parse().unwrap_or(0));

    let generic = |name: String| {
        Record::Rr(Rr {
            name,
            record_type: record.record_type.clone(),
            data: record.value.clone(),
            ttl,
        })
    };

    match record.record_type.to_ascii_uppercase().as_str() {
        "A" | "AAAA" => match record.value.parse::<IpAddr>() {
            Ok(ip) => Record::Address(Address { name, ip, ttl }),
            Err(_) => {
                log::debug!(
                    "[{PROVIDER}] Address record {name} has non-IP value '{}', keeping it as {}",
                    record.value,
                    record.record_type
                );
                generic(name)
            }
        },
        "TXT" => Record::Txt(Txt {
            name,
            text: record.value.clone(),
            ttl,
        }),
        "CNAME" => Record::Cname(Cname {
            name,
            target: record.value.clone(),
            ttl,
        }),
        "MX" => Record::Mx(Mx {
            name,
            target: record.value.clone(),
            preference: record
                .mx
                .as_deref()
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(0),
            ttl,
        }),
        _ => generic(name),
    }
}

/// Converts a uniform record to the provider's representation.
///
/// Only `name`, `record_type`, `value`, `ttl` and (for MX) `mx` are filled.
/// TTL is sent in whole seconds. A generic MX whose data reads
/// `"<preference> <target>"` is split the same way as [`Mx`].
pub(crate) fn from_record(record: &Record, zone: &str) -> DnspodRecord {
    let name = relative_name(record.name(), zone);
    let ttl = record.ttl().as_secs().to_string();

    let (record_type, value, mx) = match record {
        Record::Address(r) => (address_type(&r.ip).to_string(), r.ip.to_string(), None),
        Record::Txt(r) => ("TXT".to_string(), r.text.clone(), None),
        Record::Cname(r) => ("CNAME".to_string(), r.target.clone(), None),
        Record::Mx(r) => (
            "MX".to_string(),
            r.target.clone(),
            Some(r.preference.to_string()),
        ),
        Record::Rr(r) => match split_mx(r) {
            Some((preference, target)) => ("MX".to_string(), target, Some(preference)),
            None => (r.record_type.clone(), r.data.clone(), None),
        },
    };

    DnspodRecord {
        name,
        record_type,
        value,
        ttl,
        mx,
        ..DnspodRecord::default()
    }
}

/// Splits generic MX data into `(preference, target)`.
fn split_mx(rr: &Rr) -> Option<(String, String)> {
    if !rr.record_type.eq_ignore_ascii_case("MX") {
        return None;
    }
    let (preference, target) = rr.data.trim().split_once(char::is_whitespace)?;
    let preference: u16 = preference.parse().ok()?;
    Some((preference.to_string(), target.trim_start().to_string()))
}

/// Overlays the non-empty fields echoed by `Record.Create` / `Record.Modify`
/// onto the record that was submitted.
pub(crate) fn merge_echoed(submitted: DnspodRecord, echoed: DnspodRecord) -> DnspodRecord {
    fn pick(echoed: String, submitted: String) -> String {
        if echoed.is_empty() { submitted } else { echoed }
    }

    fn pick_opt(echoed: Option<String>, submitted: Option<String>) -> Option<String> {
        echoed.filter(|v| !v.is_empty()).or(submitted)
    }

    DnspodRecord {
        id: pick(echoed.id, submitted.id),
        ttl: pick(echoed.ttl, submitted.ttl),
        value: pick(echoed.value, submitted.value),
        enabled: pick(echoed.enabled, submitted.enabled),
        status: pick(echoed.status, submitted.status),
        updated_on: pick(echoed.updated_on, submitted.updated_on),
        name: pick(echoed.name, submitted.name),
        line: pick(echoed.line, submitted.line),
        line_id: pick(echoed.line_id, submitted.line_id),
        record_type: pick(echoed.record_type, submitted.record_type),
        weight: pick_opt(echoed.weight, submitted.weight),
        mx: pick_opt(echoed.mx, submitted.mx),
        remark: pick_opt(echoed.remark, submitted.remark),
    }
}
