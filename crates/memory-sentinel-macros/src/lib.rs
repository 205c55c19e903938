use proc_macro::TokenStream;
use quote::quote;
use syn::{Expr, ItemFn, parse_macro_input};

/// Runs the function body under a `memory_sentinel::ScopedSentinel`.
///
/// `#[guarded]` forbids every allocation; `#[guarded(quota = 1024)]` permits a
/// budget and refuses the rest. The quota may be any integer expression;
/// values above `i64::MAX` saturate. On async functions the sentinel lives inside
/// the returned future, which is therefore not `Send`.
#[proc_macro_attribute]
pub fn guarded(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut quota: Option<Expr> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("quota") {
            quota = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported guarded property, expected `quota = <bytes>`"))
        }
    });
    parse_macro_input!(attr with parser);

    let input = parse_macro_input!(item as ItemFn);
    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let block = &input.block;

    let guard = match quota {
        Some(quota) => quote! {
            let _sentinel = memory_sentinel::ScopedSentinel::with_quota(
                <i64 as ::core::convert::TryFrom<_>>::try_from(#quota).unwrap_or(i64::MAX),
            );
        },
        None => quote! {
            let _sentinel = memory_sentinel::ScopedSentinel::new();
        },
    };

    let output = if sig.asyncness.is_some() {
        quote! {
            #(#attrs)*
            #vis #sig {
                async {
                    #guard
                    #block
                }.await
            }
        }
    } else {
        quote! {
            #(#attrs)*
            #vis #sig {
                #guard
                #block
            }
        }
    };

    output.into()
}
