use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

#[derive(Default)]
struct Accessors {
    get: bool,
    set: bool,
}

impl Accessors {
    fn parse(field: &Field) -> syn::Result<Self> {
        let mut accessors = Self::default();

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("helper")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("get") {
                    accessors.get = true;
                } else if meta.path.is_ident("set") {
                    accessors.set = true;
                } else if meta.path.is_ident("all") {
                    accessors.get = true;
                    accessors.set = true;
                } else {
                    return Err(meta.error(format!(
                        "Unexpected accessor: {}. Expected one of: get, set or all",
                        meta.path
                            .segments
                            .iter()
                            .map(|segment| segment.ident.to_string())
                            .collect::<Vec<_>>()
                            .join("::")
                    )));
                }

                Ok(())
            })?;
        }

        Ok(accessors)
    }
}

/// Generates `field(&self) -> &T` getters and `field_set(self, T) -> Self` builders
///
/// Fields opt in with `#[helper(get)]`, `#[helper(set)]` or `#[helper(all)]`.
/// There are no `&mut` accessors: values built with these helpers are replaced, not edited.
#[proc_macro_derive(ImplHelper, attributes(helper))]
pub fn impl_helper(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let fields = match input.data {
        Data::Struct(data_struct) => match data_struct.fields {
            Fields::Named(fields) => fields.named,
            _ => {
                return syn::Error::new_spanned(name, "ImplHelper needs named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "ImplHelper only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let mut methods = Vec::default();

    for field in fields.iter() {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;

        let accessors = match Accessors::parse(field) {
            Ok(accessors) => accessors,
            Err(e) => return e.to_compile_error().into(),
        };

        if accessors.get {
            methods.push(quote! {
                pub fn #field_name(&self) -> &#field_type {
                    &self.#field_name
                }
            });
        }

        if accessors.set {
            let fn_name = format_ident!("{}_set", field_name);

            methods.push(quote! {
                #[must_use = "method moves the value of self and returns the modified value"]
                pub fn #fn_name(mut self, value: #field_type) -> Self {
                    self.#field_name = value;
                    self
                }
            });
        }
    }

    TokenStream::from(quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    })
}
