//! Typed extra arguments passed to markup hooks.

use crate::nav::MenuItem;

/// Context handed to every hook fired for a markup call.
///
/// Plain page elements leave every field empty. The navigation walker fills
/// `depth` for list wrappers and all three fields for items and links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkupArgs {
    /// Nesting depth of the menu level or item (0 = top level).
    pub depth: Option<usize>,
    /// Whether the menu item renders a sub-menu.
    pub has_children: Option<bool>,
    /// Menu item being rendered.
    pub item: Option<MenuItem>,
}

impl MarkupArgs {
    /// Context carrying only a depth.
    #[must_use]
    pub fn at_depth(depth: usize) -> Self {
        Self {
            depth: Some(depth),
            ..Self::default()
        }
    }

    /// Context for a menu item at `depth`.
    #[must_use]
    pub fn for_item(item: &MenuItem, depth: usize, has_children: bool) -> Self {
        Self {
            depth: Some(depth),
            has_children: Some(has_children),
            item: Some(item.clone()),
        }
    }

    /// `has_children`, treating "not set" as `false`.
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.has_children.unwrap_or(false)
    }
}
