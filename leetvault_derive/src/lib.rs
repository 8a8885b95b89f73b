mod field_list;
mod helper;

use field_list::impl_field_list;
use proc_macro::TokenStream;

/// Implements `FieldList` for a struct with named fields.
///
/// The generated impl lists the field names in declaration order, so the trait
/// must be in scope where the derive is used.
#[proc_macro_derive(FieldList)]
pub fn derive_field_list(input: TokenStream) -> TokenStream {
    impl_field_list(input.into()).into()
}
