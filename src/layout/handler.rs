use std::{fmt, rc::Rc};

use gpui::{App, SharedString, Window};

/// A click callback supplied by the application.
///
/// The closure is shared: cloning a configuration clones the `Rc`, never the
/// closure's captured state.
#[derive(Clone)]
pub struct ClickHandler(Rc<dyn Fn(&mut Window, &mut App) + 'static>);

impl ClickHandler {
    pub fn new(handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn call(&self, window: &mut Window, cx: &mut App) {
        (self.0)(window, cx)
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

/// Two handlers are equal when they share the same closure.
impl PartialEq for ClickHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// What a renderer should do when a menu item or link is activated.
///
/// A click handler always wins over `href`: when both are set the handler
/// runs and no navigation happens.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// The item's click handler runs.
    Callback,
    /// Navigate to `href`, in a new context when `external` is set.
    Navigate { href: SharedString, external: bool },
    /// Open or close the item's nested menu.
    ToggleSubmenu,
    /// The item isn't interactive.
    Inert,
}

impl Activation {
    pub(crate) fn resolve(
        on_click: Option<&ClickHandler>,
        href: Option<&SharedString>,
        external: bool,
        has_children: bool,
    ) -> Self {
        if on_click.is_some() {
            Activation::Callback
        } else if let Some(href) = href {
            Activation::Navigate {
                href: href.clone(),
                external,
            }
        } else if has_children {
            Activation::ToggleSubmenu
        } else {
            Activation::Inert
        }
    }

    pub fn is_interactive(&self) -> bool {
        !matches!(self, Activation::Inert)
    }
}
