use std::{ops::Deref, sync::LazyLock};

use gpui::{Global, Pixels, SharedString};
use serde::{Deserialize, Serialize};

use super::deserializers::de_pixels;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_string(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    generate_builtin_themes!(["../../themes/default.json", DEFAULT]);

    /// Parses a theme from its JSON representation.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    /// Heights of interactive controls, keyed by `ButtonSize`.
    pub control_height: ThemeControlHeights,
    /// Bar heights, keyed by `NavbarSize`.
    pub navbar_height: ThemeNavbarHeights,
    /// Content container widths, keyed by `MaxWidth`.
    pub max_width: ThemeMaxWidths,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeControlHeights {
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeNavbarHeights {
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
}

/// `full` has no token: it always spans the parent.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeMaxWidths {
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(rename = "2xl", deserialize_with = "de_pixels")]
    pub xxl: Pixels,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::px;

    #[test]
    fn test_default_theme_parses() {
        let theme = Theme::DEFAULT;
        assert_eq!(theme.name.as_ref(), "Default");
    }

    #[test]
    fn test_default_control_heights_ascend() {
        let theme = Theme::DEFAULT;
        let heights = &theme.layout.control_height;
        assert!(heights.xs < heights.sm);
        assert!(heights.sm < heights.md);
        assert!(heights.md < heights.lg);
        assert!(heights.lg < heights.xl);
    }

    #[test]
    fn test_default_max_widths_ascend() {
        let theme = Theme::DEFAULT;
        let widths = &theme.layout.max_width;
        assert!(widths.sm < widths.md);
        assert!(widths.md < widths.lg);
        assert!(widths.lg < widths.xl);
        assert!(widths.xl < widths.xxl);
    }

    #[test]
    fn test_theme_from_string() {
        let theme = Theme::from_string(
            r#"{
                "name": "Dense",
                "layout": {
                    "control_height": { "xs": 20, "sm": 24, "md": 28, "lg": 32, "xl": 40 },
                    "navbar_height": { "sm": "40px", "md": "48px", "lg": "56px" },
                    "max_width": { "sm": 600, "md": 720, "lg": 960, "xl": 1140, "2xl": 1320 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(theme.name.as_ref(), "Dense");
        assert_eq!(theme.layout.control_height.md, px(28.));
        assert_eq!(theme.layout.navbar_height.lg, px(56.));
        assert_eq!(theme.layout.max_width.xxl, px(1320.));
    }

    #[test]
    fn test_theme_missing_token_is_rejected() {
        let result = Theme::from_string(
            r#"{
                "name": "Broken",
                "layout": {
                    "control_height": { "xs": 20, "sm": 24, "md": 28, "lg": 32 },
                    "navbar_height": { "sm": 40, "md": 48, "lg": 56 },
                    "max_width": { "sm": 600, "md": 720, "lg": 960, "xl": 1140, "2xl": 1320 }
                }
            }"#,
        );

        assert!(result.is_err());
    }
}
