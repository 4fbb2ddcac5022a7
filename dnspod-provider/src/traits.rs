use async_trait::async_trait;

use crate::error::{BatchResult, Result};
use crate::types::Record;

/// Lists the records of a zone.
#[async_trait]
pub trait RecordGetter: Send + Sync {
    /// Returns every record in `zone`, in the order the provider lists them.
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;
}

/// Adds records to a zone.
#[async_trait]
pub trait RecordAppender: Send + Sync {
    /// Creates each record in `zone` and returns the records that were created.
    ///
    /// Stops at the first failure; records created before it are returned in
    /// [`BatchError::completed`](crate::BatchError::completed).
    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}

/// Creates or updates records in a zone.
#[async_trait]
pub trait RecordSetter: Send + Sync {
    /// For each record, updates the first existing record with the same name and type,
    /// or creates it when there is none. Returns the resulting records.
    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}

/// Removes records from a zone.
#[async_trait]
pub trait RecordDeleter: Send + Sync {
    /// Deletes the existing record whose name, type and data match each input exactly.
    /// Returns the records that were deleted.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}

/// Full record management: get, append, set and delete.
///
/// Implemented for every type that implements the four operation traits, so it can be
/// used as `Arc<dyn RecordManager>` by tooling that needs the whole contract.
pub trait RecordManager: RecordGetter + RecordAppender + RecordSetter + RecordDeleter {}

impl<T> RecordManager for T where T: RecordGetter + RecordAppender + RecordSetter + RecordDeleter {}
