//! Document store abstraction with one collection per entity type.
//!
//! Records are JSON objects keyed by a string `id`. Application code talks
//! to the [`DocumentStore`] trait, usually through the [`Query`] builder:
//!
//! ```ignore
//! use mythrealms::store::QueryExt;
//!
//! let forest_quests = store
//!     .query(Collection::Quests)
//!     .eq("realm", "forest")
//!     .fetch_all_as::<Quest>()
//!     .await?;
//! ```
//!
//! Two backends are provided: PostgreSQL (JSONB records, one table per
//! collection) and an in-memory store.

mod filter;
mod query;
mod record;
mod traits;

pub mod backends;

pub use filter::Filter;
pub use query::{Query, QueryExt, DEFAULT_LIMIT};
pub use record::{Record, RecordStream};
pub use traits::{DocumentStore, SqlClient, SqlExecutor, Transaction};
