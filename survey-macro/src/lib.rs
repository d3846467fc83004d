//! Procedural macro for deriving `AnswerSink` implementations.
//!
//! The generated `write_answer` stores an answer in the field whose
//! `#[survey("...")]` tag equals the question name. Without a matching tag,
//! the field whose identifier equals the name (ignoring ASCII case) is used.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Meta, parse_macro_input};

/// Derive `AnswerSink` for a struct with named fields.
///
/// # Attributes
///
/// ## On fields
/// - `#[survey("name")]` - Question name that writes into this field
///
/// Every field type must implement `FromAnswer`.
#[proc_macro_derive(AnswerSink, attributes(survey))]
pub fn derive_answer_sink(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    implement_answer_sink(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn implement_answer_sink(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = sink_fields(input)?;

    let tag_arms = fields.iter().filter_map(|field| {
        let ident = &field.ident;
        field.tag.as_ref().map(|tag| {
            quote! {
                if name == #tag {
                    self.#ident = survey::FromAnswer::from_answer(name, answer)?;
                    return ::std::result::Result::Ok(());
                }
            }
        })
    });

    let name_arms = fields.iter().map(|field| {
        let ident = &field.ident;
        let field_name = ident.to_string();
        let field_name = field_name.trim_start_matches("r#");
        quote! {
            if name.eq_ignore_ascii_case(#field_name) {
                self.#ident = survey::FromAnswer::from_answer(name, answer)?;
                return ::std::result::Result::Ok(());
            }
        }
    });

    Ok(quote! {
        impl #impl_generics survey::AnswerSink for #name #ty_generics #where_clause {
            fn write_answer(
                &mut self,
                name: &str,
                answer: survey::Answer,
            ) -> ::std::result::Result<(), survey::AnswerError> {
                #(#tag_arms)*
                #(#name_arms)*
                ::std::result::Result::Err(survey::AnswerError::UnknownField(name.to_string()))
            }
        }
    })
}

// ============================================================================
// Attribute Extraction
// ============================================================================

/// A struct field that can receive an answer.
struct SinkField {
    ident: Ident,
    tag: Option<String>,
}

fn sink_fields(input: &DeriveInput) -> syn::Result<Vec<SinkField>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "AnswerSink can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &data.fields,
            "AnswerSink requires a struct with named fields",
        ));
    };

    named
        .named
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
            Ok(SinkField {
                ident,
                tag: extract_tag(&field.attrs)?,
            })
        })
        .collect()
}

fn extract_tag(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut tag = None;
    for attr in attrs {
        if attr.path().is_ident("survey") {
            tag = Some(extract_string_attr(attr)?);
        }
    }
    Ok(tag)
}

fn extract_string_attr(attr: &Attribute) -> syn::Result<String> {
    match &attr.meta {
        Meta::List(list) => {
            let lit: LitStr = list.parse_args()?;
            Ok(lit.value())
        }
        _ => Err(syn::Error::new_spanned(
            attr,
            "expected #[survey(\"question name\")]",
        )),
    }
}
