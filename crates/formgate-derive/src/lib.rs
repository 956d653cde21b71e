// File: formgate-derive/src/lib.rs
// Purpose: #[derive(Form)] - field name list and typed field accessors

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Derive macro for the `formgate::Form` trait
///
/// Generates the `Form` impl (the list of field names, in declaration order)
/// and one associated `Field` constant per struct field, named after the
/// field in upper case.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, PartialEq, Form)]
/// struct InvitationForm {
///     has_code: bool,
///     #[form(rename = "invitationCode")]
///     code: String,
/// }
///
/// // InvitationForm::HAS_CODE: Field<InvitationForm, bool>   named "has_code"
/// // InvitationForm::CODE:     Field<InvitationForm, String> named "invitationCode"
/// ```
#[proc_macro_derive(Form, attributes(form))]
pub fn derive_form(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_form(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct FormFieldInfo {
    ident: syn::Ident,
    vis: syn::Visibility,
    ty: syn::Type,
    key: String,
}

fn impl_form(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Form cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Form only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Form only supports structs",
            ))
        }
    };

    let mut infos = Vec::new();
    for field in fields {
        let ident = match &field.ident {
            Some(ident) => ident.clone(),
            None => continue,
        };
        let key = extract_rename(&field.attrs)?.unwrap_or_else(|| unraw(&ident));

        if infos.iter().any(|info: &FormFieldInfo| info.key == key) {
            return Err(syn::Error::new_spanned(
                &ident,
                format!("duplicate form field name `{}`", key),
            ));
        }

        infos.push(FormFieldInfo {
            ident,
            vis: field.vis.clone(),
            ty: field.ty.clone(),
            key,
        });
    }

    let keys = infos.iter().map(|info| &info.key);

    let accessors = infos.iter().map(|info| {
        let FormFieldInfo { ident, vis, ty, key } = info;
        let const_name = format_ident!("{}", unraw(ident).to_uppercase());

        quote! {
            #vis const #const_name: ::formgate::Field<#name, #ty> = {
                fn get(form: &#name) -> &#ty {
                    &form.#ident
                }
                fn set(form: &mut #name, value: #ty) {
                    form.#ident = value;
                }
                ::formgate::Field::new(#key, get, set)
            };
        }
    });

    Ok(quote! {
        impl ::formgate::Form for #name {
            fn field_names() -> &'static [&'static str] {
                &[#(#keys),*]
            }
        }

        impl #name {
            #(#accessors)*
        }
    })
}

/// Parse `#[form(rename = "...")]`
fn extract_rename(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;

    for attr in attrs {
        if !attr.path().is_ident("form") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(syn::Error::new(
                        value.span(),
                        "form field name must not be empty",
                    ));
                }
                rename = Some(value.value());
                Ok(())
            } else {
                Err(syn::Error::new_spanned(
                    &meta.path,
                    "unsupported form attribute, expected `rename`",
                ))
            }
        })?;
    }

    Ok(rename)
}

// r#type -> type
fn unraw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
}
