use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields, Generics, Index, Member};

use crate::common::{parse_view_mode, reject_field_attrs, ViewMode};

/// Largest record the arity window accepts.
const MAX_FIELDS: usize = 7;

/// Probe answers emitted for a derived type.
#[derive(Default)]
struct Answers {
    native: bool,
    traversable: bool,
    declares_key: bool,
    pair_elements: bool,
    pair_shaped: bool,
}

/// #[derive(Render)] registers a type with the shape dispatcher.
///
/// Without an attribute the type must be a struct with 1 to 7 fields; it
/// gets a `Probe` impl classifying it as a record and a `Fields` impl listing
/// its fields in declaration order. The `#[view(...)]` modes register the
/// type as native, sequence or map instead and emit no field list.
pub fn expand_derive_render(input: DeriveInput) -> syn::Result<TokenStream2> {
    match parse_view_mode(&input.attrs)? {
        ViewMode::Display => Ok(expand_probe(
            &input,
            &input.generics,
            Answers { native: true, ..Answers::default() },
        )),
        ViewMode::Sequence => Ok(expand_probe(
            &input,
            &input.generics,
            Answers { traversable: true, ..Answers::default() },
        )),
        ViewMode::Map => {
            let mut generics = input.generics.clone();
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(Self: ::container_view::Keyed));
            Ok(expand_probe(
                &input,
                &generics,
                Answers {
                    traversable: true,
                    declares_key: true,
                    pair_elements: true,
                    ..Answers::default()
                },
            ))
        }
        ViewMode::Record => expand_record(&input),
    }
}

// =============================================================================
// Probe
// =============================================================================

fn flag(present: bool) -> TokenStream2 {
    if present {
        quote! { ::container_view::Present }
    } else {
        quote! { ::container_view::Absent }
    }
}

fn expand_probe(input: &DeriveInput, generics: &Generics, answers: Answers) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let native = flag(answers.native);
    let traversable = flag(answers.traversable);
    let declares_key = flag(answers.declares_key);
    let pair_elements = flag(answers.pair_elements);
    let pair_shaped = flag(answers.pair_shaped);

    quote! {
        impl #impl_generics ::container_view::Probe for #name #ty_generics #where_clause {
            type Special = ::container_view::probe::Structural;
            type Native = #native;
            type Traversable = #traversable;
            type DeclaresKey = #declares_key;
            type PairElements = #pair_elements;
            type PairShaped = #pair_shaped;
        }
    }
}

// =============================================================================
// Record
// =============================================================================

fn expand_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                format!(
                    "enum `{}` cannot be rendered as a record; implement `Display` and add `#[view(display)]`",
                    name
                ),
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                format!(
                    "union `{}` cannot be rendered as a record; implement `Display` and add `#[view(display)]`",
                    name
                ),
            ));
        }
    };

    if let Fields::Unit = fields {
        return Err(syn::Error::new_spanned(
            name,
            format!(
                "unit struct `{}` has no fields; records must have between 1 and {} fields, or add `#[view(display)]`",
                name, MAX_FIELDS
            ),
        ));
    }

    let count = fields.len();
    if count == 0 || count > MAX_FIELDS {
        return Err(syn::Error::new_spanned(
            name,
            format!(
                "`{}` has {} fields; records must have between 1 and {} fields",
                name, count, MAX_FIELDS
            ),
        ));
    }

    for field in fields.iter() {
        reject_field_attrs(&field.attrs)?;
    }

    let members: Vec<Member> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(i)),
        })
        .collect();

    let pair_shaped = is_pair_shaped(fields);
    let probe = expand_probe(
        input,
        &input.generics,
        Answers { pair_shaped, ..Answers::default() },
    );

    // Fields impl: every type parameter must itself be renderable.
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::container_view::Render));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let arity = syn::Ident::new(&format!("A{}", count), proc_macro2::Span::call_site());

    let pair_like = if pair_shaped {
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
        let mut types = fields.iter().map(|field| &field.ty);
        let first = types.next();
        let second = types.next();
        quote! {
            impl #impl_generics ::container_view::PairLike for #name #ty_generics #where_clause {
                type First = #first;
                type Second = #second;

                #[inline]
                fn first(&self) -> &Self::First {
                    &self.first
                }

                #[inline]
                fn second(&self) -> &Self::Second {
                    &self.second
                }
            }
        }
    } else {
        TokenStream2::new()
    };

    let native_guard = expand_native_guard(input);

    Ok(quote! {
        #probe

        #native_guard

        impl #impl_generics ::container_view::Fields for #name #ty_generics #where_clause {
            type Arity = ::container_view::primitives::#arity;

            fn visit<__V: ::container_view::FieldVisitor>(&self, visitor: &mut __V) -> ::core::fmt::Result {
                #( visitor.field(&self.#members)?; )*
                ::core::result::Result::Ok(())
            }
        }

        #pair_like
    })
}

/// Native rendering wins over the record fallback: a concrete record type
/// that also implements `Display` is ambiguous and rejected.
///
/// Generic types are skipped, their `Display` impl may depend on the
/// parameters.
fn expand_native_guard(input: &DeriveInput) -> TokenStream2 {
    if !input.generics.params.is_empty() {
        return TokenStream2::new();
    }

    let name = &input.ident;
    let message = syn::LitStr::new(
        &format!(
            "`{}` implements `Display`; add `#[view(display)]` to render it natively instead of as a record",
            name
        ),
        name.span(),
    );

    quote! {
        const _: () = {
            #[allow(unused_imports)]
            use ::container_view::probe::detect::{Detect, NativeFallback};
            ::core::assert!(!Detect::<#name>::IS_NATIVE, #message);
        };
    }
}

/// Named fields exactly `first` then `second`.
fn is_pair_shaped(fields: &Fields) -> bool {
    let Fields::Named(named) = fields else {
        return false;
    };
    let names: Vec<String> = named
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(ToString::to_string))
        .collect();
    names == ["first", "second"]
}
