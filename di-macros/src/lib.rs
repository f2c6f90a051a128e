//! Compile-time dependency injection macros for MythRealms.
//!
//! - `#[derive(Context)]` makes a struct's fields extractable
//! - `#[derive(FromContext)]` resolves a struct's fields from a context
//!
//! Generated code references `crate::FromRef`, so the consuming crate must
//! expose the trait at its root.

use proc_macro::TokenStream;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Data, DeriveInput, Field, Fields};

mod context;
mod from_context;

/// Derive macro for the DI root.
///
/// Generates `impl FromRef<Root> for FieldType` for every field. Field types
/// must be distinct and `Clone`.
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub store: AppStore,
///     pub config: Arc<Config>,
/// }
///
/// // impl FromRef<Context> for AppStore { ... }
/// // impl FromRef<Context> for Arc<Config> { ... }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    context::derive_context_impl(input)
}

/// Derive macro for types built from a context.
///
/// Generates `impl FromRef<Context> for Self`, resolving each field with
/// `FromRef::from_ref(ctx)`. The context type defaults to `Context` and can
/// be overridden:
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// #[from_context(Context = "TestContext")]
/// pub struct DocumentRepository {
///     store: AppStore,
/// }
/// ```
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    from_context::derive_from_context_impl(input)
}

/// Returns the named fields of a struct, or a spanned error naming the macro.
pub(crate) fn named_fields<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("{} can only be derived for structs with named fields", macro_name),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{} can only be derived for structs", macro_name),
        )),
    }
}
