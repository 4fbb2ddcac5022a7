//! # dnspod-provider
//!
//! DNS record management for [DNSPod](https://www.dnspod.cn/) through its legacy
//! `dnsapi.cn` API, exposed as a small provider-independent record contract
//! (get / append / set / delete) for ACME clients, dynamic-DNS updaters and
//! similar automation.
//!
//! ## Operations
//!
//! | Trait | Method | Behavior |
//! |-------|--------|----------|
//! | [`RecordGetter`] | `get_records` | List every record of a zone |
//! | [`RecordAppender`] | `append_records` | Create each record |
//! | [`RecordSetter`] | `set_records` | Update the first record with the same name and type, or create |
//! | [`RecordDeleter`] | `delete_records` | Remove the record with the same name, type and data |
//!
//! [`RecordManager`] bundles all four and is implemented automatically.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use dnspod_provider::{DnspodProvider, Record, RecordGetter, RecordSetter, Txt};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Credential format: "<id>,<token>"
//!     let provider = DnspodProvider::new("12345,0123456789abcdef")?;
//!
//!     for record in provider.get_records("example.com").await? {
//!         let rr = record.rr();
//!         println!("{} {} {}", rr.name, rr.record_type, rr.data);
//!     }
//!
//!     let challenge = Record::Txt(Txt {
//!         name: "_acme-challenge.example.com.".to_string(),
//!         text: "token-value".to_string(),
//!         ttl: Duration::from_secs(600),
//!     });
//!     provider.set_records("example.com", &[challenge]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Names
//!
//! Record names in the [`Record`] model are fully-qualified and dot-terminated
//! (`"www.example.com."`). Zones may be given with or without the trailing dot.
//!
//! ## Error Handling
//!
//! Single-shot calls return [`Result<T, ProviderError>`](ProviderError). Batch
//! mutations return [`BatchResult`]: on failure the [`BatchError`] carries the
//! records that were completed before the failing one, since nothing is rolled
//! back.
//!
//! - [`ProviderError::ApiError`]: DNSPod rejected the call (bad token, rate limit, invalid parameters)
//! - [`ProviderError::DomainNotFound`]: the zone is not in the account
//! - [`ProviderError::RecordNotFound`]: `delete_records` found no exact match
//! - [`ProviderError::NetworkError`] / [`ProviderError::HttpError`] / [`ProviderError::Timeout`]: transport failures
//!
//! Nothing is retried.
//!
//! ## Cancellation
//!
//! Dropping an operation's future (e.g. via `tokio::time::timeout`) stops it
//! before any further API call is issued. Changes already applied stay applied.

mod dnspod;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{BatchError, BatchResult, ProviderError, Result};

// Re-export traits
pub use traits::{RecordAppender, RecordDeleter, RecordGetter, RecordManager, RecordSetter};

// Re-export types
pub use types::{Address, Cname, Mx, ProviderDomain, Record, Rr, Txt};

// Re-export the provider
pub use dnspod::{DnspodConfig, DnspodProvider, DnspodProviderBuilder};
