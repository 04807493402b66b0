#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use gpui::{App, ElementId, Length, SharedString, Window, relative};
use serde::{Deserialize, Serialize, de::Error};

use crate::{
    layout::{Activation, ClickHandler},
    theme::ThemeExt,
    variant::{VariantSet, de_variant_or_default},
};

/// Deepest menu nesting `NavbarConfig::from_json` accepts. Top-level items
/// are at depth 1.
pub const MAX_MENU_DEPTH: usize = 100;

/// Deepest `{`/`[` nesting a navbar document can need: the root object, then
/// an item array and item object per level, then an empty `children` array.
const MAX_JSON_NESTING: usize = 2 * MAX_MENU_DEPTH + 2;

/// Deepest `{`/`[` nesting in a JSON document, ignoring brackets in strings.
fn json_nesting(json: &str) -> usize {
    let mut deepest = 0;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

/// Color of the badge attached to a menu item.
#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "menu badge variant")]
pub enum NavBadgeVariant {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
}

/// Platforms a navbar can link to.
#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[variant_set(kind = "navbar social icon")]
pub enum NavSocialIcon {
    Github,
    Twitter,
    Linkedin,
    Discord,
    Youtube,
}

#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "navbar variant")]
pub enum NavbarVariant {
    #[default]
    Default,
    Transparent,
    Bordered,
    Glass,
    Dark,
}

/// Navbar height, resolving to the theme's navbar heights.
#[derive(VariantSet, Assoc, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[variant_set(kind = "navbar size")]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum NavbarSize {
    #[assoc(resolve = cx.get_theme().layout.navbar_height.sm)]
    Sm,
    #[default]
    #[assoc(resolve = cx.get_theme().layout.navbar_height.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.navbar_height.lg)]
    Lg,
}

/// Main-axis distribution of the navbar's content.
#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "content alignment")]
pub enum ContentAlign {
    Start,
    Center,
    End,
    #[default]
    Between,
    Around,
    Evenly,
}

/// Width cap of the navbar's content container.
#[derive(VariantSet, Assoc, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[variant_set(kind = "max width")]
#[func(pub fn resolve(&self, cx: &App) -> Length)]
pub enum MaxWidth {
    #[assoc(resolve = cx.get_theme().layout.max_width.sm.into())]
    Sm,
    #[assoc(resolve = cx.get_theme().layout.max_width.md.into())]
    Md,
    #[assoc(resolve = cx.get_theme().layout.max_width.lg.into())]
    Lg,
    #[default]
    #[assoc(resolve = cx.get_theme().layout.max_width.xl.into())]
    Xl,
    #[tag("2xl")]
    #[assoc(resolve = cx.get_theme().layout.max_width.xxl.into())]
    Xxl,
    #[assoc(resolve = relative(1.).into())]
    Full,
}

/// Content of a menu item badge: a label or a count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavBadge {
    Number(f64),
    Text(SharedString),
}

impl fmt::Display for NavBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavBadge::Number(number) => write!(f, "{number}"),
            NavBadge::Text(text) => f.write_str(text),
        }
    }
}

impl From<SharedString> for NavBadge {
    fn from(value: SharedString) -> Self {
        NavBadge::Text(value)
    }
}

impl From<&'static str> for NavBadge {
    fn from(value: &'static str) -> Self {
        NavBadge::Text(value.into())
    }
}

impl From<String> for NavBadge {
    fn from(value: String) -> Self {
        NavBadge::Text(value.into())
    }
}

impl From<u32> for NavBadge {
    fn from(value: u32) -> Self {
        NavBadge::Number(value.into())
    }
}

impl From<i32> for NavBadge {
    fn from(value: i32) -> Self {
        NavBadge::Number(value.into())
    }
}

impl From<f64> for NavBadge {
    fn from(value: f64) -> Self {
        NavBadge::Number(value)
    }
}

/// A navbar entry. Items nest to any depth through `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavMenuItem {
    pub label: SharedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<SharedString>,
    /// Opaque icon identifier, passed through to the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<SharedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<NavBadge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_variant: Option<NavBadgeVariant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavMenuItem>,
    #[serde(skip)]
    pub on_click: Option<ClickHandler>,
}

impl NavMenuItem {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            href: None,
            icon: None,
            badge: None,
            badge_variant: None,
            children: Vec::new(),
            on_click: None,
        }
    }

    pub fn href(mut self, href: impl Into<SharedString>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<NavBadge>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn badge_variant(mut self, badge_variant: NavBadgeVariant) -> Self {
        self.badge_variant = Some(badge_variant);
        self
    }

    pub fn child(mut self, child: NavMenuItem) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = NavMenuItem>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on_click(mut self, on_click: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(ClickHandler::new(on_click));
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Badge color, falling back to `NavBadgeVariant::Primary`.
    pub fn resolved_badge_variant(&self) -> NavBadgeVariant {
        self.badge_variant.unwrap_or_default()
    }

    /// Number of levels in this subtree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];

        while let Some((item, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(item.children.iter().map(|child| (child, depth + 1)));
        }

        deepest
    }

    /// Every nested item, depth-first in pre-order. Excludes `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First item in this subtree (including `self`) with the given label.
    pub fn find(&self, label: &str) -> Option<&NavMenuItem> {
        if self.label.as_ref() == label {
            return Some(self);
        }

        self.descendants().find(|item| item.label.as_ref() == label)
    }

    /// What activating this item does, without running anything.
    pub fn activation(&self) -> Activation {
        Activation::resolve(
            self.on_click.as_ref(),
            self.href.as_ref(),
            false,
            self.has_children(),
        )
    }

    /// Runs the click handler when there is one and reports what the
    /// renderer should do next.
    pub fn activate(&self, window: &mut Window, cx: &mut App) -> Activation {
        if let Some(on_click) = &self.on_click {
            on_click.call(window, cx);
        }

        self.activation()
    }
}

/// Pre-order iterator over a menu subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a NavMenuItem>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a NavMenuItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend(item.children.iter().rev());
        Some(item)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavBrand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<SharedString>,
    /// Logo asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<SharedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<SharedString>,
}

impl NavBrand {
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

    pub fn href(mut self, href: impl Into<SharedString>) -> Self {
        self.href = Some(href.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSocialLink {
    pub icon: NavSocialIcon,
    pub href: SharedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<SharedString>,
}

impl NavSocialLink {
    pub fn new(icon: NavSocialIcon, href: impl Into<SharedString>) -> Self {
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

    /// Accessible name, falling back to the platform tag.
    pub fn accessible_label(&self) -> SharedString {
        self.label
            .clone()
            .unwrap_or_else(|| self.icon.as_str().into())
    }
}

/// The two item groups a navbar renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItemGroup {
    Items,
    RightItems,
}

impl NavItemGroup {
    fn as_str(&self) -> &'static str {
        match self {
            NavItemGroup::Items => "items",
            NavItemGroup::RightItems => "right_items",
        }
    }
}

/// Location of an item inside a `NavbarConfig`: its group, then the child
/// index at every level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavItemPath {
    pub group: NavItemGroup,
    pub indices: Vec<usize>,
}

impl NavItemPath {
    fn root(group: NavItemGroup, index: usize) -> Self {
        Self {
            group,
            indices: vec![index],
        }
    }

    fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.indices.len() + 1);
        indices.extend_from_slice(&self.indices);
        indices.push(index);

        Self {
            group: self.group,
            indices,
        }
    }

    /// Nesting level; top-level items are at depth 1.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// A stable element id for stateful rendering, derived from `base`.
    pub fn element_id(&self, base: impl Into<ElementId>) -> ElementId {
        let group = ElementId::NamedChild(Box::new(base.into()), self.group.as_str().into());

        self.indices.iter().fold(group, |id, index| {
            ElementId::NamedChild(Box::new(id), index.to_string().into())
        })
    }
}

impl fmt::Display for NavItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group.as_str())?;

        for index in &self.indices {
            write!(f, "/{index}")?;
        }

        Ok(())
    }
}

/// Content of a navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<NavBrand>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavMenuItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub right_items: Vec<NavMenuItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<NavSocialLink>,
}

impl NavbarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Click handlers can't be expressed
    /// in JSON and are attached afterwards.
    ///
    /// Menus nested deeper than `MAX_MENU_DEPTH` are rejected before any
    /// item is built.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json_nesting(json) > MAX_JSON_NESTING {
            return Err(serde_json::Error::custom(format!(
                "menu nesting exceeds {MAX_MENU_DEPTH} levels"
            )));
        }

        // Bounded by the check above. serde_json's own limit stops at 63 levels.
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();

        let config = Self::deserialize(&mut deserializer)?;
        deserializer.end()?;

        Ok(config)
    }

    /// Levels of the deepest menu in either group; 0 without items.
    pub fn max_depth(&self) -> usize {
        self.walk().map(|(path, _)| path.depth()).max().unwrap_or(0)
    }

    pub fn brand(mut self, brand: NavBrand) -> Self {
        self.brand = Some(brand);
        self
    }

    pub fn item(mut self, item: NavMenuItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = NavMenuItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn right_item(mut self, item: NavMenuItem) -> Self {
        self.right_items.push(item);
        self
    }

    pub fn social_link(mut self, link: NavSocialLink) -> Self {
        self.social_links.push(link);
        self
    }

    fn group(&self, group: NavItemGroup) -> &[NavMenuItem] {
        match group {
            NavItemGroup::Items => &self.items,
            NavItemGroup::RightItems => &self.right_items,
        }
    }

    /// Every item with its path: `items` first, then `right_items`, each
    /// depth-first in pre-order.
    pub fn walk(&self) -> Walk<'_> {
        let mut stack = Vec::new();

        for group in [NavItemGroup::RightItems, NavItemGroup::Items] {
            let items = self.group(group);
            stack.extend(
                items
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(index, item)| (NavItemPath::root(group, index), item)),
            );
        }

        Walk { stack }
    }

    /// Number of items at every depth in both groups.
    pub fn item_count(&self) -> usize {
        self.walk().count()
    }

    pub fn get(&self, path: &NavItemPath) -> Option<&NavMenuItem> {
        let (first, rest) = path.indices.split_first()?;
        let mut item = self.group(path.group).get(*first)?;

        for index in rest {
            item = item.children.get(*index)?;
        }

        Some(item)
    }

    /// First item with the given label, in `walk` order.
    pub fn find(&self, label: &str) -> Option<(NavItemPath, &NavMenuItem)> {
        self.walk().find(|(_, item)| item.label.as_ref() == label)
    }
}

/// Pre-order iterator over every item of a `NavbarConfig`.
pub struct Walk<'a> {
    stack: Vec<(NavItemPath, &'a NavMenuItem)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (NavItemPath, &'a NavMenuItem);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, item) = self.stack.pop()?;

        self.stack.extend(
            item.children
                .iter()
                .enumerate()
                .rev()
                .map(|(index, child)| (path.child(index), child)),
        );

        Some((path, item))
    }
}

/// Presentation options a navbar component accepts next to its config.
///
/// Unknown tags fall back to the field's default instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarStyle {
    #[serde(default, deserialize_with = "de_variant_or_default")]
    pub variant: NavbarVariant,
    #[serde(default, deserialize_with = "de_variant_or_default")]
    pub size: NavbarSize,
    #[serde(default, deserialize_with = "de_variant_or_default")]
    pub content_align: ContentAlign,
    #[serde(default, deserialize_with = "de_variant_or_default")]
    pub max_width: MaxWidth,
}

impl NavbarStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: NavbarVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: NavbarSize) -> Self {
        self.size = size;
        self
    }

    pub fn content_align(mut self, content_align: ContentAlign) -> Self {
        self.content_align = content_align;
        self
    }

    pub fn max_width(mut self, max_width: MaxWidth) -> Self {
        self.max_width = max_width;
        self
    }
}
