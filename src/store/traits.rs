//! Core traits for document store access.
//!
//! - [`DocumentStore`] - Collection-level reads and writes (required for all backends)
//! - [`SqlExecutor`] - Raw SQL, used by migrations
//! - [`Transaction`] - Transaction lifecycle (commit/rollback)
//! - [`SqlClient`] - Transaction creation for SQL backends

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::Collection;
use crate::store::filter::Filter;
use crate::store::record::{Record, RecordStream};

/// A document store with one logical collection per entity type.
///
/// Each method is a single atomic store operation; nothing spans calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persists a record. The record must carry a string `id`.
    async fn insert(&self, collection: Collection, record: Record) -> Result<(), AppError>;

    /// Streams up to `limit` records matching `filter`, in insertion order.
    async fn find(
        &self,
        collection: Collection,
        filter: Filter,
        limit: usize,
    ) -> Result<RecordStream<'_>, AppError>;

    /// Fetches the record with the given id.
    async fn find_one(&self, collection: Collection, id: &str)
        -> Result<Option<Record>, AppError>;

    /// Merges the top-level fields of `patch` into the record with the given
    /// id and returns the merged record, or `None` if no such record exists.
    ///
    /// An `id` in the patch is ignored.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Record,
    ) -> Result<Option<Record>, AppError>;

    /// Counts all records in a collection.
    async fn count(&self, collection: Collection) -> Result<u64, AppError>;
}

/// Executes SQL statements.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Executes one or more statements without returning results.
    async fn execute_sql(&self, sql: &str) -> Result<(), AppError>;

    /// Executes a query, returning each row as a record keyed by column name.
    async fn query_sql(&self, sql: &str) -> Result<RecordStream<'_>, AppError>;
}

/// Transaction lifecycle management.
#[async_trait]
pub trait Transaction: Send + Sync {
    /// Commits the transaction. Consumes it.
    async fn commit(self) -> Result<(), AppError>;

    /// Rolls back the transaction. Consumes it.
    async fn rollback(self) -> Result<(), AppError>;
}

/// A SQL client that can begin transactions.
#[async_trait]
pub trait SqlClient: Send + Sync {
    /// The transaction type returned by this client.
    type Tx<'a>: Transaction + SqlExecutor
    where
        Self: 'a;

    /// Begins a new transaction, which must be committed or rolled back.
    async fn begin(&self) -> Result<Self::Tx<'_>, AppError>;
}
