//! Backend implementations of [`DocumentStore`](crate::store::DocumentStore).
//!
//! | Backend | Module | Used by |
//! |---------|--------|---------|
//! | PostgreSQL (JSONB) | [`postgres`] | `serve`, `init` |
//! | In-memory | [`memory`] | `serve --in-memory`, tests |

pub mod memory;
pub mod postgres;
