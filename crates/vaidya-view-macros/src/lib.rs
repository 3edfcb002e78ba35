//! Proc macros for Vaidya View.
//!
//! - [`Viewable`](derive@Viewable) - by-name field access and default search
//!   fields for list records

mod view;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `vaidya_view::Viewable` for a struct with named fields.
///
/// # Field Attributes
///
/// | Attribute | Field value | Field type |
/// |-----------|-------------|------------|
/// | `text` | `Field::Text` | `String`, `&str`, or an `Option` of those |
/// | `number` | `Field::Number` | any primitive number |
/// | `timestamp` | `Field::Instant` | implements `ViewTimestamp` |
/// | `choice` | `Field::Choice` | implements `ViewChoice` |
/// | `flag` | `Field::Flag` | `bool` |
///
/// Modifiers:
///
/// - `search` adds the field to `Viewable::SEARCH_FIELDS` (text or choice
///   only; a bare `#[view(search)]` means `text, search`)
/// - `rename = "..."` exposes the field under another name
/// - `skip` leaves the field out; so does having no `#[view]` at all
///
/// Each exposed field also gets a name constant (`Patient::NEXT_SESSION`).
///
/// # Example
///
/// ```ignore
/// use vaidya_view::{Viewable, ViewChoice};
///
/// #[derive(Viewable)]
/// struct Patient {
///     #[view(text, search)]
///     name: String,
///     #[view(choice)]
///     status: Status,
///     #[view(number)]
///     progress: u8,
///     #[view(text)]
///     next_session: Option<String>,
///     #[view(skip)]
///     notes: String,
/// }
///
/// assert_eq!(Patient::NEXT_SESSION, "next_session");
/// assert_eq!(Patient::SEARCH_FIELDS, &["name"]);
/// ```
#[proc_macro_derive(Viewable, attributes(view))]
pub fn viewable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    view::viewable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
