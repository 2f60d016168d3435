//! Tuple shape generation macro.
//!
//! Pairs are registered by hand; every other arity up to the limit renders
//! as a fixed-arity tuple `(a, b, c)`.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, Index, LitInt};

pub struct TupleInput {
    pub max: usize,
}

impl Parse for TupleInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(TupleInput { max })
    }
}

pub fn expand_tuple_shapes(input: TupleInput) -> TokenStream {
    let impls = (0..=input.max).filter(|&n| n != 2).map(expand_tuple);
    quote! { #(#impls)* }
}

fn expand_tuple(arity: usize) -> TokenStream {
    let params: Vec<Ident> = (0..arity)
        .map(|i| Ident::new(&format!("T{}", i), Span::call_site()))
        .collect();
    let indices = (0..arity).map(Index::from);

    // `(T0,)` needs the trailing comma to stay a tuple.
    let tuple = if arity == 1 {
        quote! { (#(#params,)*) }
    } else {
        quote! { (#(#params),*) }
    };

    quote! {
        impl<#(#params),*> Probe for #tuple {
            type Special = Tuple;
            type Native = Absent;
            type Traversable = Absent;
            type DeclaresKey = Absent;
            type PairElements = Absent;
            type PairShaped = Absent;
        }

        impl<#(#params: Render),*> Strategy<#tuple> for Tuple {
            const SHAPE: Shape = Shape::Special(SpecialKind::Tuple);

            #[allow(unused_variables, unused_mut)]
            fn write(value: &#tuple, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut tuple = Delimited::open(f, "(", ")")?;
                #( tuple.item(&value.#indices)?; )*
                tuple.close()
            }
        }
    }
}
