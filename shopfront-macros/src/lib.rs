//! Procedural macros for shopfront

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    data: darling::ast::Data<ActionVariant, ()>,

    /// Enable automatic category inference from variant name prefixes
    #[darling(default)]
    infer_categories: bool,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,
    fields: darling::ast::Fields<()>,

    /// Explicit category override
    #[darling(default)]
    category: Option<String>,

    /// Exclude from category inference
    #[darling(default)]
    skip_category: bool,
}

// Verbs that end the resource prefix of an action name. "Did" also ends
// the prefix: it marks the result phase of an async effect
// (CartDidFetch -> "cart").
const ACTION_VERBS: &[&str] = &[
    "Fetch", "Load", "Save", "Add", "Remove", "Delete", "Update", "Set", "Rename", "Clear",
    "Open", "Close", "Submit", "Confirm", "Cancel", "Reset", "Did",
];

/// Split a PascalCase string into parts
fn split_pascal_case(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for ch in s.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            parts.push(current);
            current = String::new();
        }
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Convert PascalCase to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(ch.to_lowercase().next().unwrap());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Infer a resource category from a variant name.
///
/// The category is the snake_case prefix before the first action verb:
/// `CartFetch` -> "cart", `CartDidSetCount` -> "cart",
/// `UserClearError` -> "user". Names that start with a verb, or contain
/// no verb at all, stay uncategorized.
fn infer_category(name: &str) -> Option<String> {
    let parts = split_pascal_case(name);
    if parts.len() < 2 {
        return None;
    }

    if ACTION_VERBS.contains(&parts[0].as_str()) {
        return None;
    }

    let prefix_end = parts
        .iter()
        .position(|part| ACTION_VERBS.contains(&part.as_str()))?;

    let prefix: String = parts[..prefix_end].join("");
    Some(to_snake_case(&prefix))
}

/// Derive macro for the Action trait
///
/// Generates `Action::name()` returning the variant name as a static
/// string, and an `ActionCategory` impl. Categories are `None` unless
/// `#[action(infer_categories)]` is set on the enum, in which case each
/// variant's category is inferred from its name prefix
/// (`CartFetch` -> `"cart"`). Per-variant overrides:
///
/// - `#[action(category = "...")]` - set the category explicitly
/// - `#[action(skip_category)]` - leave the variant uncategorized
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// #[action(infer_categories)]
/// enum CartAction {
///     CartFetch,
///     CartDidFetch(Vec<CartItem>),
///     CartDidFetchError(String),
/// }
///
/// let action = CartAction::CartFetch;
/// assert_eq!(action.name(), "CartFetch");
/// assert_eq!(action.category(), Some("cart"));
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let name_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let variant_str = variant_name.to_string();

        match &v.fields.style {
            darling::ast::Style::Unit => quote! {
                #name::#variant_name => #variant_str
            },
            darling::ast::Style::Tuple => quote! {
                #name::#variant_name(..) => #variant_str
            },
            darling::ast::Style::Struct => quote! {
                #name::#variant_name { .. } => #variant_str
            },
        }
    });

    let category_arms: Vec<_> = variants
        .iter()
        .map(|v| {
            let variant_name = &v.ident;
            let category = if v.skip_category {
                None
            } else if let Some(ref explicit) = v.category {
                Some(explicit.clone())
            } else if opts.infer_categories {
                infer_category(&variant_name.to_string())
            } else {
                None
            };

            let category_expr = match category {
                Some(c) => quote! { ::core::option::Option::Some(#c) },
                None => quote! { ::core::option::Option::None },
            };
            // Braced wildcard pattern handles all field styles
            quote! { #name::#variant_name { .. } => #category_expr }
        })
        .collect();

    let expanded = quote! {
        impl shopfront::Action for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }

        impl shopfront::ActionCategory for #name {
            fn category(&self) -> ::core::option::Option<&'static str> {
                match self {
                    #(#category_arms),*
                }
            }
        }
    };

    expanded.into()
}
