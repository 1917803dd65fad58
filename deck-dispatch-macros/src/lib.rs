//! Procedural macros for deck-dispatch

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput, LitStr};

/// Container-level attributes for #[derive(Mutation)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(mutation), supports(enum_any))]
struct MutationOpts {
    ident: Ident,
    data: darling::ast::Data<MutationVariant, ()>,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(mutation))]
struct MutationVariant {
    ident: Ident,

    /// Explicit mutation name override
    #[darling(default)]
    rename: Option<String>,
}

/// Convert PascalCase to camelCase
fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Derive macro for the Mutation trait
///
/// Generates a `name()` method returning the camelCase variant name, so
/// `SetGames` commits as `"setGames"`. Use `#[mutation(rename = "...")]`
/// on a variant to pick a different name.
///
/// # Example
/// ```ignore
/// #[derive(Mutation, Clone, Debug)]
/// enum GamesMutation {
///     SetGames(Vec<Game>),
///     #[mutation(rename = "games/clear")]
///     Clear,
/// }
///
/// assert_eq!(GamesMutation::SetGames(vec![]).name(), "setGames");
/// assert_eq!(GamesMutation::Clear.name(), "games/clear");
/// ```
#[proc_macro_derive(Mutation, attributes(mutation))]
pub fn derive_mutation(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match MutationOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Mutation can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let name_arms = variants.iter().map(|v| mutation_name_arm(name, v));

    let expanded = quote! {
        impl ::deck_dispatch::Mutation for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// `Enum::Variant { .. } => "variantName"`
fn mutation_name_arm(enum_name: &Ident, variant: &MutationVariant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let mutation_name = variant
        .rename
        .clone()
        .unwrap_or_else(|| to_camel_case(&variant_name.to_string()));
    quote! {
        #enum_name::#variant_name { .. } => #mutation_name
    }
}

/// Names of the `:param` segments in a path pattern
fn pattern_params(pattern: &str) -> Vec<&str> {
    pattern
        .split('/')
        .filter_map(|segment| segment.strip_prefix(':'))
        .collect()
}

struct RouteVariant<'a> {
    variant: &'a syn::Variant,
    paths: Vec<LitStr>,
    not_found: bool,
}

fn parse_route_variant(variant: &syn::Variant) -> syn::Result<RouteVariant<'_>> {
    let mut paths = Vec::new();
    let mut not_found = false;

    for attr in &variant.attrs {
        if attr.path().is_ident("at") {
            paths.push(attr.parse_args::<LitStr>()?);
        } else if attr.path().is_ident("not_found") {
            attr.meta.require_path_only()?;
            not_found = true;
        }
    }

    if paths.is_empty() {
        return Err(syn::Error::new_spanned(
            variant,
            "Routable variants need at least one #[at(\"/path\")] attribute",
        ));
    }

    match &variant.fields {
        syn::Fields::Unit => {
            for path in &paths {
                if !pattern_params(&path.value()).is_empty() {
                    return Err(syn::Error::new_spanned(
                        path,
                        "path has parameters but the variant has no fields",
                    ));
                }
            }
        }
        syn::Fields::Named(fields) => {
            if not_found {
                return Err(syn::Error::new_spanned(
                    variant,
                    "#[not_found] variant must be a unit variant",
                ));
            }
            for path in &paths {
                let value = path.value();
                let params = pattern_params(&value);
                for field in &fields.named {
                    let field_name = field.ident.as_ref().map(|i| i.to_string());
                    if !params.iter().any(|p| Some(*p) == field_name.as_deref()) {
                        return Err(syn::Error::new_spanned(
                            path,
                            format!(
                                "path does not bind field `{}`",
                                field_name.unwrap_or_default()
                            ),
                        ));
                    }
                }
            }
        }
        syn::Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                variant,
                "Routable variants must be unit or have named fields",
            ));
        }
    }

    Ok(RouteVariant {
        variant,
        paths,
        not_found,
    })
}

/// Derive macro for the Routable trait
///
/// Each variant declares one or more `#[at("...")]` paths. Extra paths are
/// aliases; the first is used when generating links. `:param` segments bind
/// the named field of the same name via `FromStr`. One unit variant may be
/// marked `#[not_found]` as the fallback for unmatched paths.
///
/// # Example
/// ```ignore
/// #[derive(Routable, Clone, Debug, PartialEq)]
/// enum Route {
///     #[at("/")]
///     #[at("/games")]
///     Games,
///     #[at("/games/:name")]
///     Game { name: String },
///     #[not_found]
///     #[at("/404")]
///     NotFound,
/// }
///
/// assert_eq!(Route::recognize("/"), Some(Route::Games));
/// assert_eq!(Route::Games.to_path(), "/");
/// ```
#[proc_macro_derive(Routable, attributes(at, not_found))]
pub fn derive_routable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_routable(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_routable(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let data = match &input.data {
        syn::Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Routable can only be derived for enums",
            ));
        }
    };

    let routes = data
        .variants
        .iter()
        .map(parse_route_variant)
        .collect::<syn::Result<Vec<_>>>()?;

    let mut fallbacks = routes.iter().filter(|r| r.not_found);
    let not_found = fallbacks.next().map(|r| &r.variant.ident);
    if let Some(extra) = fallbacks.next() {
        return Err(syn::Error::new_spanned(
            extra.variant,
            "only one variant can be #[not_found]",
        ));
    }

    let mut patterns = Vec::new();
    let mut match_arms = Vec::new();
    let mut path_arms = Vec::new();
    let mut name_arms = Vec::new();

    for route in &routes {
        let variant_name = &route.variant.ident;
        let variant_str = variant_name.to_string();

        name_arms.push(quote! { #name::#variant_name { .. } => #variant_str });

        let field_names: Vec<&Ident> = route
            .variant
            .fields
            .iter()
            .filter_map(|f| f.ident.as_ref())
            .collect();
        let field_strs: Vec<String> = field_names.iter().map(|f| f.to_string()).collect();

        let construct = if field_names.is_empty() {
            quote! { #name::#variant_name }
        } else {
            quote! {
                #name::#variant_name {
                    #(#field_names: ::core::str::FromStr::from_str(_params.get(#field_strs)?).ok()?),*
                }
            }
        };

        for path in &route.paths {
            let index = patterns.len();
            match_arms.push(quote! {
                #index => ::core::option::Option::Some(#construct)
            });
            patterns.push(path.clone());
        }

        let canonical = &route.paths[0];
        let locals: Vec<_> = field_names
            .iter()
            .map(|f| format_ident!("__{}", f))
            .collect();
        let bindings = if field_names.is_empty() {
            quote! { #name::#variant_name { .. } }
        } else {
            quote! { #name::#variant_name { #(#field_names),* } }
        };
        path_arms.push(quote! {
            #bindings => {
                #(let #locals = ::std::string::ToString::to_string(#field_names);)*
                ::deck_dispatch::format_path(#canonical, &[#((#field_strs, #locals.as_str())),*])
            }
        });
    }

    let not_found_expr = match not_found {
        Some(variant) => quote! { ::core::option::Option::Some(#name::#variant) },
        None => quote! { ::core::option::Option::None },
    };

    Ok(quote! {
        impl ::deck_dispatch::Routable for #name {
            fn patterns() -> &'static [&'static str] {
                &[#(#patterns),*]
            }

            fn from_match(
                index: usize,
                _params: &::deck_dispatch::RouteParams,
            ) -> ::core::option::Option<Self> {
                match index {
                    #(#match_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn to_path(&self) -> ::std::string::String {
                match self {
                    #(#path_arms),*
                }
            }

            fn not_found_route() -> ::core::option::Option<Self> {
                #not_found_expr
            }

            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    })
}
