use crate::helper;
use proc_macro2::TokenStream;
use syn::DeriveInput;

pub fn impl_field_list(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = match syn::parse2(input) {
        Ok(ast) => ast,
        Err(e) => return e.to_compile_error(),
    };

    let fields = match helper::extract_fields(&ast) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error(),
    };

    let names = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| ident.to_string()))
        .collect::<Vec<String>>();
    let field_list = names.join(",");

    let struct_name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    quote::quote! {
        impl #impl_generics FieldList for #struct_name #ty_generics #where_clause {
            fn fields() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn field_list() -> &'static str {
                #field_list
            }
        }
    }
}
