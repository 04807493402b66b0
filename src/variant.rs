//! Closed sets of string tags.
//!
//! Every variant family in the kit is an enum deriving [`VariantSet`]. The
//! derive generates `FromStr`, `Display`, `Serialize` and a strict
//! `Deserialize`, all spelled from one tag table.

use std::fmt::Debug;

use serde::{Deserialize, Deserializer};

pub use gpui_uikit_macros::VariantSet;

/// A closed set of string tags for a component property.
pub trait VariantSet: Sized + Copy + Debug + 'static {
    /// Human readable name of the family, used in error messages.
    const KIND: &'static str;

    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The canonical tag.
    fn as_str(&self) -> &'static str;

    /// Whether `value` names a member of the set.
    fn is_valid(value: &str) -> bool {
        Self::ALL.iter().any(|variant| variant.as_str() == value)
    }

    /// Every canonical tag, in declaration order.
    fn tags() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|variant| variant.as_str())
    }

    /// Parses `value`, substituting the default when it isn't a member.
    fn parse_or_default(value: &str) -> Self
    where
        Self: Default + std::str::FromStr,
    {
        match value.parse::<Self>() {
            Ok(variant) => variant,
            Err(_) => {
                let fallback = Self::default();
                log::warn!(
                    "unknown {} \"{}\", using \"{}\"",
                    Self::KIND,
                    value,
                    fallback.as_str()
                );
                fallback
            }
        }
    }
}

/// Lenient serde helper: an unknown tag becomes the type's default.
///
/// Structural errors (a number where a tag was expected) are still reported.
pub fn de_variant_or_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: VariantSet + Default + std::str::FromStr,
{
    let value = String::deserialize(deserializer)?;
    Ok(V::parse_or_default(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ButtonSize, CardVariant};

    #[test]
    fn test_is_valid() {
        assert!(ButtonSize::is_valid("xs"));
        assert!(!ButtonSize::is_valid("XS"));
        assert!(!ButtonSize::is_valid(""));
    }

    #[test]
    fn test_tags_in_declaration_order() {
        let tags: Vec<_> = ButtonSize::tags().collect();
        assert_eq!(tags, ["xs", "sm", "md", "lg", "xl"]);
    }

    #[test]
    fn test_parse_or_default_keeps_known_tag() {
        assert_eq!(CardVariant::parse_or_default("glass"), CardVariant::Glass);
    }

    #[test]
    fn test_parse_or_default_substitutes_default() {
        assert_eq!(CardVariant::parse_or_default("neon"), CardVariant::Default);
        assert_eq!(ButtonSize::parse_or_default("huge"), ButtonSize::Md);
    }

    #[test]
    fn test_lenient_deserializer() {
        #[derive(serde::Deserialize)]
        struct Props {
            #[serde(deserialize_with = "de_variant_or_default")]
            card: CardVariant,
        }

        let props: Props = serde_json::from_str(r#"{ "card": "neon" }"#).unwrap();
        assert_eq!(props.card, CardVariant::Default);

        let props: Props = serde_json::from_str(r#"{ "card": "elevated" }"#).unwrap();
        assert_eq!(props.card, CardVariant::Elevated);

        assert!(serde_json::from_str::<Props>(r#"{ "card": 3 }"#).is_err());
    }
}
