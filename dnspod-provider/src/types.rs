use std::net::IpAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ Typed records ============

/// Address record (`A` for IPv4, `AAAA` for IPv6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Fully-qualified, dot-terminated name.
    pub name: String,
    /// Address served by the record.
    pub ip: IpAddr,
    /// Time to live.
    pub ttl: Duration,
}

/// Text record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Txt {
    /// Fully-qualified, dot-terminated name.
    pub name: String,
    /// Text content, verbatim.
    pub text: String,
    /// Time to live.
    pub ttl: Duration,
}

/// Canonical-name record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cname {
    /// Fully-qualified, dot-terminated name.
    pub name: String,
    /// Alias target.
    pub target: String,
    /// Time to live.
    pub ttl: Duration,
}

/// Mail-exchange record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mx {
    /// Fully-qualified, dot-terminated name.
    pub name: String,
    /// Mail server host.
    pub target: String,
    /// Preference (lower = preferred).
    pub preference: u16,
    /// Time to live.
    pub ttl: Duration,
}

/// Generic resource record.
///
/// Used for every type without a dedicated variant, and as the canonical projection
/// ([`Record::rr`]) through which any two records are compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rr {
    /// Fully-qualified, dot-terminated name.
    pub name: String,
    /// Record type tag (e.g. `"NS"`, `"SRV"`).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Opaque, presentation-format record data.
    pub data: String,
    /// Time to live.
    pub ttl: Duration,
}

// ============ Uniform record ============

/// A DNS record in the provider-independent model.
///
/// Names are always fully-qualified and dot-terminated (`"www.example.com."`).
/// Every variant can be projected to an [`Rr`] with [`Record::rr`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    /// `A` / `AAAA` record.
    Address(Address),
    /// `TXT` record.
    Txt(Txt),
    /// `CNAME` record.
    Cname(Cname),
    /// `MX` record.
    Mx(Mx),
    /// Any other type, carried as opaque data.
    Rr(Rr),
}

impl Record {
    /// Fully-qualified record name.
    pub fn name(&self) -> &str {
        match self {
            Self::Address(r) => &r.name,
            Self::Txt(r) => &r.name,
            Self::Cname(r) => &r.name,
            Self::Mx(r) => &r.name,
            Self::Rr(r) => &r.name,
        }
    }

    /// Time to live.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Address(r) => r.ttl,
            Self::Txt(r) => r.ttl,
            Self::Cname(r) => r.ttl,
            Self::Mx(r) => r.ttl,
            Self::Rr(r) => r.ttl,
        }
    }

    /// Record type tag of the canonical projection.
    pub fn record_type(&self) -> &str {
        match self {
            Self::Address(r) => address_type(&r.ip),
            Self::Txt(_) => "TXT",
            Self::Cname(_) => "CNAME",
            Self::Mx(_) => "MX",
            Self::Rr(r) => &r.record_type,
        }
    }

    /// Canonical projection `{name, type, data, ttl}`.
    ///
    /// MX data is rendered as `"<preference> <target>"`.
    pub fn rr(&self) -> Rr {
        let data = match self {
            Self::Address(r) => r.ip.to_string(),
            Self::Txt(r) => r.text.clone(),
            Self::Cname(r) => r.target.clone(),
            Self::Mx(r) => format!("{} {}", r.preference, r.target),
            Self::Rr(r) => r.data.clone(),
        };

        Rr {
            name: self.name().to_string(),
            record_type: self.record_type().to_string(),
            data,
            ttl: self.ttl(),
        }
    }
}

/// `AAAA` when the textual form of the address contains a colon, `A` otherwise.
pub(crate) fn address_type(ip: &IpAddr) -> &'static str {
    if ip.to_string().contains(':') {
        "AAAA"
    } else {
        "A"
    }
}

impl From<Address> for Record {
    fn from(r: Address) -> Self {
        Self::Address(r)
    }
}

impl From<Txt> for Record {
    fn from(r: Txt) -> Self {
        Self::Txt(r)
    }
}

impl From<Cname> for Record {
    fn from(r: Cname) -> Self {
        Self::Cname(r)
    }
}

impl From<Mx> for Record {
    fn from(r: Mx) -> Self {
        Self::Mx(r)
    }
}

impl From<Rr> for Record {
    fn from(r: Rr) -> Self {
        Self::Rr(r)
    }
}

// ============ Domains ============

/// A domain (zone) hosted in the DNSPod account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDomain {
    /// Provider-internal domain identifier.
    pub id: String,
    /// Domain name without trailing dot (e.g. `"example.com"`).
    pub name: String,
    /// Provider status string (e.g. `"enable"`, `"pause"`).
    pub status: String,
}
