use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, Lit, Meta, PathArguments, Type};

/// Derive macro that documents the fields of an input struct.
///
/// For each named field it records:
/// - Field name (respects `#[serde(rename = "...")]`)
/// - Value type, with any `Option<...>` wrapper removed
/// - Whether the field is optional (declared as `Option<T>`)
/// - Description (from doc comments)
///
/// Generates a `field_docs() -> &'static [FieldDoc]` method. A `FieldDoc`
/// type with `name`, `ty`, `optional` and `description` fields must be in
/// scope where the derive is used.
#[proc_macro_derive(FieldDocs, attributes(serde))]
pub fn derive_field_docs(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "FieldDocs needs named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "FieldDocs only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let entries = fields.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let field_name = serde_rename(&field.attrs).unwrap_or_else(|| ident.to_string());
        let inner = option_inner(&field.ty);
        let optional = inner.is_some();
        let ty = type_label(inner.unwrap_or(&field.ty));
        let description = doc_comment(&field.attrs);

        Some(quote! {
            FieldDoc {
                name: #field_name,
                ty: #ty,
                optional: #optional,
                description: #description,
            }
        })
    });

    let expanded = quote! {
        impl #name {
            pub fn field_docs() -> &'static [FieldDoc] {
                static DOCS: &[FieldDoc] = &[
                    #(#entries),*
                ];
                DOCS
            }
        }
    };

    TokenStream::from(expanded)
}

fn serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    let mut renamed = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                renamed = Some(value.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        });
    }
    renamed
}

fn doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                syn::Expr::Lit(expr_lit) => match &expr_lit.lit {
                    Lit::Str(lit_str) => Some(lit_str.value().trim().to_string()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        }),
        _ => None,
    }
}

fn type_label(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|s| s.ident.to_string())
            .unwrap_or_default(),
        other => quote!(#other).to_string().replace(' ', ""),
    }
}
