#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{App, Pixels};

use crate::{theme::ThemeExt, variant::VariantSet};

/// Visual style of a button.
#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "button variant")]
pub enum ButtonVariant {
    /// Filled background.
    Solid,
    /// Border only.
    Outline,
    /// Transparent until hovered.
    Ghost,
    /// Tinted background.
    Soft,
    /// Styled like an inline link.
    Link,
    Gradient,
    Glow,
    Glass,
    /// Neumorphic surface.
    Neu,
    /// Main call to action.
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
    Warning,
    Info,
    /// Icon only, no label.
    Icon,
    /// Raised with a depth effect.
    #[tag("3d")]
    ThreeD,
}

impl ButtonVariant {
    /// Whether the variant names a role (primary, secondary or a status
    /// color) rather than a surface treatment.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            Self::Primary
                | Self::Secondary
                | Self::Danger
                | Self::Success
                | Self::Warning
                | Self::Info
        )
    }
}

/// Button size, resolving to the theme's control heights.
#[derive(VariantSet, Assoc, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[variant_set(kind = "button size")]
#[func(pub fn resolve(&self, cx: &App) -> Pixels)]
pub enum ButtonSize {
    #[assoc(resolve = cx.get_theme().layout.control_height.xs)]
    Xs,
    #[assoc(resolve = cx.get_theme().layout.control_height.sm)]
    Sm,
    #[default]
    #[assoc(resolve = cx.get_theme().layout.control_height.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.control_height.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.control_height.xl)]
    Xl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidVariant;

    #[test]
    fn test_button_variant_tags() {
        let tags: Vec<_> = ButtonVariant::tags().collect();
        assert_eq!(
            tags,
            [
                "solid",
                "outline",
                "ghost",
                "soft",
                "link",
                "gradient",
                "glow",
                "glass",
                "neu",
                "primary",
                "secondary",
                "danger",
                "success",
                "warning",
                "info",
                "icon",
                "3d",
            ]
        );
        assert_eq!(ButtonVariant::ALL.len(), 17);
    }

    #[test]
    fn test_button_variant_parse() {
        assert_eq!("3d".parse::<ButtonVariant>(), Ok(ButtonVariant::ThreeD));
        assert_eq!("neu".parse::<ButtonVariant>(), Ok(ButtonVariant::Neu));
        assert_eq!("solid".parse::<ButtonVariant>(), Ok(ButtonVariant::Solid));
        assert_eq!(
            "ThreeD".parse::<ButtonVariant>(),
            Err(InvalidVariant::new("button variant", "ThreeD"))
        );
    }

    #[test]
    fn test_button_variant_display_and_default() {
        assert_eq!(ButtonVariant::ThreeD.to_string(), "3d");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn test_button_variant_serde() {
        let json = serde_json::to_string(&ButtonVariant::ThreeD).unwrap();
        assert_eq!(json, "\"3d\"");

        let variant: ButtonVariant = serde_json::from_str("\"glow\"").unwrap();
        assert_eq!(variant, ButtonVariant::Glow);

        let error = serde_json::from_str::<ButtonVariant>("\"sparkle\"").unwrap_err();
        assert!(error.to_string().contains("unknown button variant"));
    }

    #[test]
    fn test_button_variant_is_semantic() {
        assert!(ButtonVariant::Danger.is_semantic());
        assert!(!ButtonVariant::Glass.is_semantic());
        assert!(!ButtonVariant::ThreeD.is_semantic());
    }

    #[test]
    fn test_button_size_order() {
        let tags: Vec<_> = ButtonSize::tags().collect();
        assert_eq!(tags, ["xs", "sm", "md", "lg", "xl"]);
        assert!(ButtonSize::Xs < ButtonSize::Xl);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }
}
