use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Meta, parse_macro_input};

/// Derives `VariantSet`, `FromStr`, `Display`, `Serialize` and `Deserialize`
/// for a closed set of string tags.
///
/// The enum needs a `#[variant_set(kind = "...")]` attribute naming the family.
/// Each variant maps to its lowercased identifier unless it carries a
/// `#[tag("...")]` attribute.
///
/// The generated code refers to `crate::variant::VariantSet` and
/// `crate::error::InvalidVariant`, so the derive is only usable inside gpui_uikit.
#[proc_macro_derive(VariantSet, attributes(variant_set, tag))]
pub fn variant_set_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let variants = if let Data::Enum(data_enum) = input.data {
        data_enum.variants
    } else {
        panic!("#[derive(VariantSet)] can only be used on enums");
    };

    let kind = get_kind(&input.attrs);

    let mut idents = Vec::with_capacity(variants.len());
    let mut tags = Vec::with_capacity(variants.len());

    for variant in variants.iter() {
        if !matches!(variant.fields, Fields::Unit) {
            panic!("#[derive(VariantSet)] variants can't carry fields");
        }

        let tag = get_tag(&variant.attrs)
            .unwrap_or_else(|| variant.ident.to_string().to_lowercase());

        if tags.contains(&tag) {
            panic!("duplicate tag \"{tag}\" in #[derive(VariantSet)]");
        }

        idents.push(variant.ident.clone());
        tags.push(tag);
    }

    let expanded = quote! {
        impl crate::variant::VariantSet for #name {
            const KIND: &'static str = #kind;

            const ALL: &'static [Self] = &[#(#name::#idents),*];

            fn as_str(&self) -> &'static str {
                match self {
                    #(#name::#idents => #tags,)*
                }
            }
        }

        impl ::std::str::FromStr for #name {
            type Err = crate::error::InvalidVariant;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                match value {
                    #(#tags => ::std::result::Result::Ok(#name::#idents),)*
                    _ => ::std::result::Result::Err(crate::error::InvalidVariant::new(#kind, value)),
                }
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<Self as crate::variant::VariantSet>::as_str(self))
            }
        }

        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(<Self as crate::variant::VariantSet>::as_str(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(::serde::de::Error::custom)
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_kind(attrs: &[Attribute]) -> LitStr {
    let attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("variant_set"))
        .expect("Enum is missing #[variant_set(kind = \"...\")] attribute");

    let mut kind = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("kind") {
            kind = Some(meta.value()?.parse::<LitStr>()?);
            Ok(())
        } else {
            Err(meta.error("unsupported #[variant_set(...)] key"))
        }
    })
    .expect("#[variant_set(...)] must look like #[variant_set(kind = \"...\")]");

    kind.expect("#[variant_set(...)] is missing `kind`")
}

fn get_tag(attrs: &[Attribute]) -> Option<String> {
    let attr = attrs.iter().find(|attr| attr.path().is_ident("tag"))?;

    match &attr.meta {
        Meta::List(list) => {
            let tag: LitStr =
                syn::parse2(list.tokens.clone()).expect("#[tag(...)] must contain a string literal");
            Some(tag.value())
        }
        _ => panic!("#[tag(...)] must be a list, like #[tag(\"3d\")]"),
    }
}
