#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the packwise crates: error enums, feature slices,
//! API models, API handlers and the runtime bootstrap.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own
//! macros; the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro that turns an `async fn main` into a blocking `fn main`
/// running on a runtime built from a `packwise_runtime::RuntimeConfig` preset.
///
/// # Arguments
///
/// * `high_performance` - Server profile (larger stacks, long keep-alive).
/// * `memory_efficient` - CLI/edge profile (half the workers, small stacks).
/// * `default` or nothing - Worker threads detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[packwise_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Marks a struct as an API data transfer object.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when they are not derived yet,
/// derives `utoipa::ToSchema` when the consuming crate enables its `server`
/// feature, and applies `#[serde(rename_all = "camelCase")]` unless another
/// policy is given.
///
/// # Example
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case")]
/// pub struct PlanData {
///     pub packs: BTreeMap<u32, u64>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with the `OpenAPI` document.
///
/// Forwards its arguments to `utoipa::path` when the consuming crate enables
/// its `server` feature.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Declares a crate error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` when missing.
/// * A `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant that wraps a `source` error.
/// * `From<Source>` for variants with a source field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Every variant uses named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// #[packwise_error]
/// pub enum PackingError {
///     #[error("Invalid order{}: {message}", format_context(.context))]
///     InvalidOrder { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal packing error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn packwise_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a shareable feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// derefs to it and implements `packwise_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[packwise_derive::packwise_slice]
/// pub struct Packing {
///     pub catalog: PackCatalog,
/// }
///
/// let slice = Packing::new(PackingInner { catalog: PackCatalog::standard() });
/// ```
#[proc_macro_attribute]
pub fn packwise_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
