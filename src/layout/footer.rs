use gpui::{App, SharedString, Window};
use serde::{Deserialize, Serialize};

use crate::{
    layout::{Activation, ClickHandler},
    variant::{VariantSet, de_variant_or_default},
};

/// Platforms a footer can link to. A superset of `NavSocialIcon`.
#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[variant_set(kind = "footer social icon")]
pub enum FooterSocialIcon {
    Github,
    Twitter,
    Linkedin,
    Discord,
    Youtube,
    Instagram,
    Facebook,
}

#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "footer variant")]
pub enum FooterVariant {
    #[default]
    Default,
    Minimal,
    Bordered,
    Dark,
    Glass,
}

#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "footer layout")]
pub enum FooterLayout {
    /// One row of links.
    Simple,
    /// Brand block followed by one column per section.
    #[default]
    Columns,
    /// Everything stacked on the center axis.
    Centered,
}

#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "footer content alignment")]
pub enum FooterContentAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: SharedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<SharedString>,
    /// Opens outside the application.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
    #[serde(skip)]
    pub on_click: Option<ClickHandler>,
}

impl FooterLink {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            href: None,
            external: false,
            on_click: None,
        }
    }

    pub fn href(mut self, href: impl Into<SharedString>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    pub fn on_click(mut self, on_click: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(ClickHandler::new(on_click));
        self
    }

    pub fn activation(&self) -> Activation {
        Activation::resolve(
            self.on_click.as_ref(),
            self.href.as_ref(),
            self.external,
            false,
        )
    }

    pub fn activate(&self, window: &mut Window, cx: &mut App) -> Activation {
        if let Some(on_click) = &self.on_click {
            on_click.call(window, cx);
        }

        self.activation()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    pub title: SharedString,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

impl FooterSection {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            links: Vec::new(),
        }
    }

    pub fn link(mut self, link: FooterLink) -> Self {
        self.links.push(link);
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = FooterLink>) -> Self {
        self.links.extend(links);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterBrand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<SharedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<SharedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<SharedString>,
}

impl FooterBrand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn logo(mut self, logo: impl Into<SharedString>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterSocialLink {
    pub icon: FooterSocialIcon,
    pub href: SharedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<SharedString>,
}

impl FooterSocialLink {
    pub fn new(icon: FooterSocialIcon, href: impl Into<SharedString>) -> Self {
        Self {
            icon,
            href: href.into(),
            label: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Content of a page footer.
///
/// Every field is optional; `show_year` defaults to `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<FooterBrand>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<FooterSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bottom_links: Vec<FooterLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<FooterSocialLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<SharedString>,
    #[serde(default)]
    pub show_year: bool,
}

impl FooterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn brand(mut self, brand: FooterBrand) -> Self {
        self.brand = Some(brand);
        self
    }

    pub fn section(mut self, section: FooterSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn bottom_link(mut self, link: FooterLink) -> Self {
        self.bottom_links.push(link);
        self
    }

    pub fn social_link(mut self, link: FooterSocialLink) -> Self {
        self.social_links.push(link);
        self
    }

    pub fn copyright(mut self, copyright: impl Into<SharedString>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    pub fn show_year(mut self, show_year: bool) -> Self {
        self.show_year = show_year;
        self
    }

    /// The rendered copyright notice, or `None` without copyright text.
    pub fn copyright_line(&self, year: i32) -> Option<String> {
        let copyright = self.copyright.as_ref()?;

        Some(if self.show_year {
            format!("© {year} {copyright}")
        } else {
            format!("© {copyright}")
        })
    }

    /// Links across every section plus the bottom row.
    pub fn link_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.links.len())
            .sum::<usize>()
            + self.bottom_links.len()
    }

    /// Every link, section by section, then the bottom row.
    pub fn links(&self) -> impl Iterator<Item = &FooterLink> {
        self.sections
            .iter()
            .flat_map(|section| section.links.iter())
            .chain(self.bottom_links.iter())
    }
}

/// Presentation options a footer component accepts next to its config.
///
/// Unknown tags fall back to the field's default instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterStyle {
    #[serde(default, deserialize_with = "de_variant_or_default")]
    pub variant: FooterVariant,
    #[serde(default, deserialize_with = "de_variant_or_default")]
    pub layout: FooterLayout,
    #[serde(default, deserialize_with = "de_variant_or_default")]
    pub content_align: FooterContentAlign,
}

impl FooterStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: FooterVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn layout(mut self, layout: FooterLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn content_align(mut self, content_align: FooterContentAlign) -> Self {
        self.content_align = content_align;
        self
    }
}
