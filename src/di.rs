//! Dependency injection infrastructure.
//!
//! Dependencies are resolved at compile time through the `FromRef` trait and
//! the derive macros from `di-macros`:
//!
//! - `#[derive(Context)]` makes each field of the root context extractable
//! - `#[derive(FromContext)]` builds a struct by resolving each of its fields
//!
//! # Example
//!
//! ```ignore
//! #[derive(FromContext, Clone)]
//! pub struct WeaponRepository {
//!     store: AppStore, // resolved via FromRef<Context>
//! }
//!
//! let repo: WeaponRepository = ctx.resolve();
//! ```

/// Extracts a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Any `Clone` type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

pub use di_macros::{Context, FromContext};
