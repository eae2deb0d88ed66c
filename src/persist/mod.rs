pub mod sqlite;

use crate::{
    contact::{ContactDraft, ContactRecord},
    types::ContactId,
};

/// Failure reported by the backing storage engine.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Any SQLite failure: open, I/O, corruption, bad statement.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence seam for the contact log.
///
/// Every mutation is committed before the call returns. Updates and deletes that
/// name a missing id affect zero rows and still return `Ok`.
pub trait ContactStore {
    /// Ensures the backing table exists. Safe to call repeatedly.
    fn initialize(&mut self) -> StoreResult<()>;

    /// Inserts a new record and returns its store-assigned id.
    fn add(&mut self, draft: &ContactDraft) -> StoreResult<ContactId>;

    /// Overwrites all five fields of `id`. Returns the number of rows changed.
    fn update(&mut self, id: ContactId, draft: &ContactDraft) -> StoreResult<usize>;

    /// Removes `id`. Returns the number of rows removed.
    fn delete(&mut self, id: ContactId) -> StoreResult<usize>;

    /// Snapshot of every record, newest id first.
    fn list_all(&self) -> StoreResult<Vec<ContactRecord>>;
}
