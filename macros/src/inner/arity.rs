//! Arity window generation macro.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

pub struct WindowInput {
    pub max: usize,
}

impl Parse for WindowInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max == 0 {
            return Err(syn::Error::new(lit.span(), "arity window must contain at least one arity"));
        }
        Ok(WindowInput { max })
    }
}

/// `A1..=Amax`, each with its `Arity` impl and the `ArityWindow<n>` entry
/// mapping the count back to the type.
pub fn expand_arity_window(input: WindowInput) -> TokenStream {
    let arities = (1..=input.max).map(|n| {
        let name = Ident::new(&format!("A{}", n), Span::call_site());
        let count = LitInt::new(&n.to_string(), Span::call_site());
        let doc = format!("Record arity {}.", n);
        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct #name;

            impl Arity for #name {
                const COUNT: usize = #count;
            }

            impl ArityWindow<#count> for () {
                type Out = #name;
            }
        }
    });

    quote! { #(#arities)* }
}
