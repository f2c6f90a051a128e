//! Schema migrations for the PostgreSQL backend with version tracking.
//!
//! Migrations are:
//! - **Idempotent**: `IF NOT EXISTS` everywhere, so retries are safe
//! - **Forward-only**: no rollback support
//! - **Version-tracked**: the version is stored in `<schema>.schema_version`
//!
//! `init` applies them explicitly; `serve` applies pending ones on startup.

mod m001_collections;
mod runner;
mod traits;

pub use m001_collections::M001Collections;
pub use runner::{create_register, run_migrations, MigrationResult};
pub use traits::{Migration, Register};
