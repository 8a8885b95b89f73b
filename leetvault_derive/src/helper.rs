use syn::{Data, DeriveInput, Fields, FieldsNamed};

pub fn extract_fields(ast: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match ast.data {
        Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => Ok(fields),
            _ => Err(syn::Error::new_spanned(
                &ast.ident,
                "all fields must be named.",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &ast.ident,
            "struct expected, but got other item.",
        )),
    }
}
