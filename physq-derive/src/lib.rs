//! Derive macro implementation used by `physq-core`.
//!
//! `physq-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of `crate::Unit`,
//! `crate::StaticUnit` and `crate::Dimensions`, so it is intended to be used by `physq-core` (or by crates that expose
//! an identical crate-root API).
//!
//! # Generated items
//!
//! For a unit enumeration `LengthUnit` the derive implements:
//!
//! - `crate::Unit for LengthUnit` (name, standard unit, dimension set, conversion scale, spellings, parsing)
//! - an inherent `const fn scale_factor(self) -> f64` usable in `const` contexts
//! - `core::fmt::Display` (formats the abbreviation) and `core::str::FromStr`
//! - `serde::Serialize` / `serde::Deserialize` behind the `serde` feature of the expanding crate
//! - one zero-sized marker type per variant (named after the variant) implementing `crate::StaticUnit`
//!
//! # Attributes
//!
//! On the enumeration, `#[unit(...)]` requires:
//!
//! - `name = "length"`: the dimension name used in messages and configuration keys
//! - `dimensions = Dimensions::LENGTH`: the dimension set shared by every variant
//!
//! On every variant, `#[unit(...)]` accepts:
//!
//! - `symbol = "m"` (required): the abbreviation, always accepted when parsing
//! - `scale = 1.0` (required): standard units per one of this unit
//! - `standard` (exactly one variant): marks the standard unit; its scale must be `1.0`
//! - `spellings = ["metre", "metres"]` (optional): additional accepted spellings

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and its companion items for a unit enumeration.
///
/// The enumeration and each of its variants must carry a `#[unit(...)]` attribute.
///
/// This macro is intended for use by `physq-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new(
                name.span(),
                "`Unit` can only be derived for enumerations",
            ))
        }
    };

    let enum_attr: EnumAttribute = parse_unit_attribute(&input.attrs, name)?;

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.ident.span(),
                "unit variants cannot carry fields",
            ));
        }
        let attr: VariantAttribute = parse_unit_attribute(&variant.attrs, &variant.ident)?;
        variants.push((variant.ident.clone(), attr));
    }

    let standard = find_standard(name, &variants)?;

    let dimension_name = &enum_attr.name;
    let dimensions = &enum_attr.dimensions;

    let idents: Vec<&Ident> = variants.iter().map(|(ident, _)| ident).collect();
    let symbols: Vec<&LitStr> = variants.iter().map(|(_, attr)| &attr.symbol).collect();
    let scales: Vec<&Expr> = variants.iter().map(|(_, attr)| &attr.scale).collect();
    let spellings: Vec<Vec<&LitStr>> = variants
        .iter()
        .map(|(_, attr)| attr.spellings.iter().collect())
        .collect();

    let markers = variants.iter().map(|(ident, attr)| {
        let scale = &attr.scale;
        let doc = format!(
            "Compile-time marker for [`{}::{}`] (`{}`).",
            name,
            ident,
            attr.symbol.value()
        );
        quote! {
            #[doc = #doc]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct #ident;

            impl crate::StaticUnit for #ident {
                type Unit = #name;
                const UNIT: #name = #name::#ident;
                const SCALE: f64 = #scale;
            }
        }
    });

    let table = format_ident!("{}_SPELLINGS", name.to_string().to_uppercase());
    let standard_message = format!("the standard unit of `{}` must have a scale of 1.0", name);

    let expanded = quote! {
        impl #name {
            /// Standard units per one of this unit, usable in `const` contexts.
            #[inline]
            pub const fn scale_factor(self) -> f64 {
                match self {
                    #( #name::#idents => #scales, )*
                }
            }
        }

        const _: () = assert!(#name::#standard.scale_factor() == 1.0, #standard_message);

        impl crate::Unit for #name {
            const NAME: &'static str = #dimension_name;
            const STANDARD: Self = #name::#standard;
            const DIMENSIONS: crate::Dimensions = #dimensions;
            const ALL: &'static [Self] = &[ #( #name::#idents ),* ];

            #[inline]
            fn abbreviation(self) -> &'static str {
                match self {
                    #( #name::#idents => #symbols, )*
                }
            }

            #[inline]
            fn spellings(self) -> &'static [&'static str] {
                match self {
                    #( #name::#idents => &[ #( #spellings ),* ], )*
                }
            }

            #[inline]
            fn scale(self) -> f64 {
                self.scale_factor()
            }

            fn parse(text: &str) -> ::core::option::Option<Self> {
                static #table: crate::unit::SpellingTable<#name> = crate::unit::SpellingTable::new();
                #table.lookup(text)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<#name as crate::Unit>::abbreviation(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::UnknownUnitError;

            fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
                <#name as crate::Unit>::parse(text)
                    .ok_or_else(|| crate::UnknownUnitError::new::<#name>(text))
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(<#name as crate::Unit>::abbreviation(*self))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                crate::unit::deserialize_unit(deserializer)
            }
        }

        #( #markers )*
    };

    Ok(expanded)
}

fn find_standard<'a>(
    name: &Ident,
    variants: &'a [(Ident, VariantAttribute)],
) -> syn::Result<&'a Ident> {
    let mut standard: Option<&Ident> = None;
    for (ident, attr) in variants {
        if attr.standard {
            if standard.is_some() {
                return Err(syn::Error::new(
                    ident.span(),
                    "only one variant can be marked `standard`",
                ));
            }
            standard = Some(ident);
        }
    }
    standard.ok_or_else(|| {
        syn::Error::new(
            name.span(),
            "exactly one variant must be marked `#[unit(standard, ...)]`",
        )
    })
}

/// Parsed contents of the enumeration-level `#[unit(...)]` attribute.
struct EnumAttribute {
    name: LitStr,
    dimensions: Expr,
}

impl Parse for EnumAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut dimensions: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "dimensions" => {
                    dimensions = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let dimensions = dimensions.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimensions`")
        })?;

        Ok(EnumAttribute { name, dimensions })
    }
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct VariantAttribute {
    symbol: LitStr,
    scale: Expr,
    standard: bool,
    spellings: Vec<LitStr>,
}

impl Parse for VariantAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut scale: Option<Expr> = None;
        let mut standard = false;
        let mut spellings: Vec<LitStr> = Vec::new();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "standard" => {
                    standard = true;
                }
                "symbol" => {
                    input.parse::<Token![=]>()?;
                    symbol = Some(input.parse()?);
                }
                "scale" => {
                    input.parse::<Token![=]>()?;
                    scale = Some(input.parse()?);
                }
                "spellings" => {
                    input.parse::<Token![=]>()?;
                    let content;
                    syn::bracketed!(content in input);
                    let list: Punctuated<LitStr, Token![,]> =
                        content.parse_terminated(<LitStr as Parse>::parse, Token![,])?;
                    spellings.extend(list);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let scale = scale
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `scale`"))?;

        Ok(VariantAttribute {
            symbol,
            scale,
            standard,
            spellings,
        })
    }
}

fn parse_unit_attribute<T: Parse>(attrs: &[Attribute], owner: &Ident) -> syn::Result<T> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<T>();
        }
    }

    Err(syn::Error::new(
        owner.span(),
        format!("missing #[unit(...)] attribute on `{}`", owner),
    ))
}
