//! Proc-macro companion crate for pom-rs.
//!
//! Provides the [`macro@page`] attribute, which turns a plain struct of
//! element fields into a page object: it injects the session handle,
//! generates a `new` constructor wiring every field through
//! `pom_rs::PageComponent::attach`, and implements `pom_rs::Page`.
//!
//! Everything the macro emits is ordinary code a user could write by hand
//! against the public pom-rs API; the macro only removes the boilerplate.

use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, Fields, Ident, ItemStruct, Lit, LitStr, MetaNameValue, Token};

/// Declares a page object.
///
/// ```ignore
/// use pom_rs::{page, Button, Textbox};
///
/// #[page(url = "https://example.com/login")]
/// struct LoginPage {
///     #[element(name = "username")]
///     username: Textbox,
///     #[element(name = "password")]
///     password: Textbox,
///     #[element(css = "button[type='submit']")]
///     submit: Button,
/// }
/// ```
///
/// Generates:
/// - a hidden `session: pom_rs::PageSession` field,
/// - `LoginPage::new(session: impl Into<PageSession>)` constructing every
///   annotated field via `PageComponent::attach`,
/// - `impl pom_rs::Page for LoginPage` with the declared URL.
///
/// Each field needs exactly one `#[element(...)]` attribute carrying exactly
/// one locator strategy: `css`, `id`, `name`, `xpath` or `link_text`. Field
/// types may be `Textbox`, `Button`, `Element`, or any type implementing
/// `PageComponent`.
#[proc_macro_attribute]
pub fn page(attr: TokenStream, item: TokenStream) -> TokenStream {
    let url = match parse_url_arg(attr.into()) {
        Ok(url) => url,
        Err(err) => return err.to_compile_error().into(),
    };
    let input = syn::parse_macro_input!(item as ItemStruct);
    match expand_page(url, input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Parses `url = "..."` from the attribute arguments.
fn parse_url_arg(attr: proc_macro2::TokenStream) -> syn::Result<LitStr> {
    let args = Punctuated::<MetaNameValue, Token![,]>::parse_terminated.parse2(attr.clone())?;
    for arg in &args {
        if arg.path.is_ident("url") {
            if let Expr::Lit(ExprLit {
                lit: Lit::Str(url), ..
            }) = &arg.value
            {
                return Ok(url.clone());
            }
            return Err(syn::Error::new_spanned(
                &arg.value,
                "`url` must be a string literal",
            ));
        }
    }
    Err(syn::Error::new_spanned(
        attr,
        "missing page URL: use #[page(url = \"https://...\")]",
    ))
}

/// One parsed `#[element(...)]` declaration.
struct ElementDecl {
    ident: Ident,
    ty: syn::Type,
    strategy: Ident,
    value: LitStr,
}

fn expand_page(url: LitStr, mut input: ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    let Fields::Named(fields) = &mut input.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[page] requires a struct with named fields",
        ));
    };

    let mut declared = Vec::with_capacity(fields.named.len());
    for field in &mut fields.named {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(&field.ty, "expected a named field"))?;
        if ident == "session" {
            return Err(syn::Error::new_spanned(
                &ident,
                "field name `session` is reserved; #[page] injects it",
            ));
        }
        let (strategy, value) = take_element_attr(field, &ident)?;
        declared.push(ElementDecl {
            ident,
            ty: field.ty.clone(),
            strategy,
            value,
        });
    }

    // Inject the session handle after the user's fields.
    let session_field = syn::Field::parse_named
        .parse2(quote! { session: ::pom_rs::PageSession })
        .expect("injected field always parses");
    fields.named.push(session_field);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let constructors = declared.iter().map(|decl| {
        let ElementDecl {
            ident,
            ty,
            strategy,
            value,
        } = decl;
        quote! {
            #ident: <#ty as ::pom_rs::PageComponent>::attach(
                session.clone(),
                ::pom_rs::Locator::#strategy(#value),
            ),
        }
    });

    Ok(quote! {
        #input

        impl #impl_generics #name #ty_generics #where_clause {
            /// Binds this page to a driver session.
            pub fn new(session: impl ::core::convert::Into<::pom_rs::PageSession>) -> Self {
                let session = session.into();
                Self {
                    #(#constructors)*
                    session,
                }
            }
        }

        impl #impl_generics ::pom_rs::Page for #name #ty_generics #where_clause {
            fn url(&self) -> &str {
                #url
            }

            fn session(&self) -> &::pom_rs::PageSession {
                &self.session
            }
        }
    })
}

/// Extracts and removes the field's single `#[element(...)]` attribute.
fn take_element_attr(field: &mut syn::Field, ident: &Ident) -> syn::Result<(Ident, LitStr)> {
    let mut found = None;
    for attr in &field.attrs {
        if !attr.path().is_ident("element") {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                format!("field `{ident}` has more than one #[element] attribute"),
            ));
        }
        let args = attr
            .parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        let mut entries = args.iter();
        let (Some(entry), None) = (entries.next(), entries.next()) else {
            return Err(syn::Error::new_spanned(
                attr,
                "#[element] takes exactly one locator strategy, e.g. #[element(css = \"...\")]",
            ));
        };
        let strategy = strategy_ident(entry)?;
        let Expr::Lit(ExprLit {
            lit: Lit::Str(value),
            ..
        }) = &entry.value
        else {
            return Err(syn::Error::new_spanned(
                &entry.value,
                "locator expression must be a string literal",
            ));
        };
        found = Some((strategy, value.clone()));
    }
    field.attrs.retain(|attr| !attr.path().is_ident("element"));
    found.ok_or_else(|| {
        syn::Error::new_spanned(
            ident,
            format!("field `{ident}` is missing its #[element(...)] attribute"),
        )
    })
}

/// Maps the attribute key to the matching `Locator` constructor.
fn strategy_ident(entry: &MetaNameValue) -> syn::Result<Ident> {
    const STRATEGIES: [&str; 5] = ["css", "id", "name", "xpath", "link_text"];
    for strategy in STRATEGIES {
        if entry.path.is_ident(strategy) {
            return Ok(Ident::new(strategy, entry.path.span()));
        }
    }
    Err(syn::Error::new_spanned(
        &entry.path,
        format!(
            "unknown locator strategy; expected one of: {}",
            STRATEGIES.join(", ")
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn expand(attr: proc_macro2::TokenStream, item: proc_macro2::TokenStream) -> syn::Result<String> {
        let url = parse_url_arg(attr)?;
        let input: ItemStruct = syn::parse2(item)?;
        expand_page(url, input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn expands_basic_page() {
        let generated = expand(
            quote!(url = "https://example.com/login"),
            quote! {
                struct LoginPage {
                    #[element(name = "username")]
                    username: Textbox,
                    #[element(css = "button[type='submit']")]
                    submit: Button,
                }
            },
        )
        .unwrap();
        assert!(generated.contains("session : :: pom_rs :: PageSession"));
        assert!(generated.contains("fn new"));
        assert!(generated.contains("Locator :: name"));
        assert!(generated.contains("Locator :: css"));
        assert!(generated.contains("impl :: pom_rs :: Page for LoginPage"));
    }

    #[test]
    fn rejects_missing_url() {
        let err = parse_url_arg(quote!()).unwrap_err();
        assert!(err.to_string().contains("missing page URL"));
    }

    #[test]
    fn rejects_unknown_strategy() {
        let err = expand(
            quote!(url = "https://example.com"),
            quote! {
                struct P {
                    #[element(selector = "#x")]
                    x: Element,
                }
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown locator strategy"));
    }

    #[test]
    fn rejects_two_strategies_in_one_attribute() {
        let err = expand(
            quote!(url = "https://example.com"),
            quote! {
                struct P {
                    #[element(css = "#x", id = "x")]
                    x: Element,
                }
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("exactly one locator strategy"));
    }

    #[test]
    fn rejects_repeated_element_attributes() {
        let err = expand(
            quote!(url = "https://example.com"),
            quote! {
                struct P {
                    #[element(css = "#x")]
                    #[element(id = "x")]
                    x: Element,
                }
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than one #[element] attribute"));
    }

    #[test]
    fn rejects_unannotated_field() {
        let err = expand(
            quote!(url = "https://example.com"),
            quote! {
                struct P {
                    x: Element,
                }
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing its #[element"));
    }

    #[test]
    fn rejects_reserved_session_field() {
        let err = expand(
            quote!(url = "https://example.com"),
            quote! {
                struct P {
                    #[element(id = "s")]
                    session: Element,
                }
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn rejects_tuple_structs() {
        let err = expand(
            quote!(url = "https://example.com"),
            quote! {
                struct P(Element);
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }
}
