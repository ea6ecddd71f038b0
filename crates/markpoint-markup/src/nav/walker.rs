//! Menu tree traversal and the registry-backed menu renderer.

use crate::args::MarkupArgs;
use crate::attributes::Attributes;
use crate::markup::Markup;
use crate::nav::item::MenuItem;
use crate::nav::{MENU_ITEM, MENU_LEVEL, MENU_LINK, MENU_LIST};

/// Callbacks driven by [`walk_menu`].
///
/// For every item: `start_item`, then (if the item descends) `enter_level`,
/// the children, `exit_level`, and finally `end_item`. The level callbacks
/// receive the depth of the parent item.
///
/// `has_children` reflects the item's own child list. An item cut off by
/// the depth limit still reports its children but is never descended into.
pub trait MenuVisitor {
    /// A nested level is about to start below an item at `depth`.
    fn enter_level(&mut self, depth: usize);
    /// An item starts. `has_children` is true when the item has any children.
    fn start_item(&mut self, item: &MenuItem, depth: usize, has_children: bool);
    /// An item ends, after all of its children.
    fn end_item(&mut self, item: &MenuItem, depth: usize, has_children: bool);
    /// The nested level below an item at `depth` ends.
    fn exit_level(&mut self, depth: usize);
}

/// Walk `items` depth-first.
///
/// `max_depth` limits how many levels are visited; 0 visits every level.
pub fn walk_menu<V: MenuVisitor + ?Sized>(items: &[MenuItem], max_depth: usize, visitor: &mut V) {
    walk_level(items, 0, max_depth, visitor);
}

fn walk_level<V: MenuVisitor + ?Sized>(
    items: &[MenuItem],
    depth: usize,
    max_depth: usize,
    visitor: &mut V,
) {
    for item in items {
        let has_children = !item.children.is_empty();
        visitor.start_item(item, depth, has_children);
        if has_children && descends(depth, max_depth) {
            visitor.enter_level(depth);
            walk_level(&item.children, depth + 1, max_depth, visitor);
            visitor.exit_level(depth);
        }
        visitor.end_item(item, depth, has_children);
    }
}

/// Whether children of an item at `depth` are within `max_depth`.
fn descends(depth: usize, max_depth: usize) -> bool {
    max_depth == 0 || depth + 1 < max_depth
}

/// Id of the link of `item` rendered at `depth` by menu `instance`.
#[must_use]
pub fn link_id(item: &MenuItem, instance: usize, depth: usize) -> String {
    format!("link-{}-{instance}{depth}", item.id)
}

/// Attributes of the list item wrapping `item`.
#[must_use]
pub fn item_attributes(item: &MenuItem, has_children: bool) -> Attributes {
    let mut class = String::from("menu__item");
    for extra in item.css_classes() {
        class.push(' ');
        class.push_str(extra);
    }
    if has_children {
        class.push_str(" menu__item--dropdown");
    }
    if item.is_active() {
        class.push_str(" menu__item--active");
    }
    Attributes::new().with("class", class)
}

/// Attributes of the link of `item`.
#[must_use]
pub fn link_attributes(item: &MenuItem, link_id: &str) -> Attributes {
    let mut attributes = Attributes::new()
        .with("class", "menu__link")
        .with("id", link_id);
    if !item.url.is_empty() {
        attributes.set("href", item.url.as_str());
    }
    if !item.rel.is_empty() {
        attributes.set("rel", item.rel.as_str());
    } else if item.target == "_blank" {
        attributes.set("rel", "noopener noreferrer");
    }
    if !item.attr_title.is_empty() {
        attributes.set("title", item.attr_title.as_str());
    }
    if !item.target.is_empty() {
        attributes.set("target", item.target.as_str());
    }
    if item.current {
        attributes.set("aria-current", "page");
    }
    attributes
}

/// Options for [`render_menu`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOptions {
    /// Levels to render; 0 renders all of them.
    pub max_depth: usize,
    /// Distinguishes the link ids of several menus on one page.
    pub instance: usize,
    /// `id` of the top-level list.
    pub menu_id: Option<String>,
    /// `class` of the top-level list.
    pub menu_class: String,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            max_depth: 0,
            instance: 1,
            menu_id: None,
            menu_class: "menu".to_owned(),
        }
    }
}

impl MenuOptions {
    /// Builder: limit the rendered levels.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder: set the instance number used in link ids.
    #[must_use]
    pub fn with_instance(mut self, instance: usize) -> Self {
        self.instance = instance;
        self
    }

    /// Builder: set the `id` of the top-level list.
    #[must_use]
    pub fn with_menu_id(mut self, menu_id: impl Into<String>) -> Self {
        self.menu_id = Some(menu_id.into());
        self
    }
}

/// [`MenuVisitor`] that renders items through a [`Markup`] registry.
pub struct NavWalker<'a> {
    markup: &'a mut Markup,
    instance: usize,
    max_depth: usize,
    aria_labelledby: Option<String>,
}

impl<'a> NavWalker<'a> {
    /// Create a walker writing into `markup`.
    pub fn new(markup: &'a mut Markup, instance: usize) -> Self {
        Self {
            markup,
            instance,
            max_depth: 0,
            aria_labelledby: None,
        }
    }

    /// Builder: the depth limit the walk runs with, so sub-menus are
    /// labelled only by items that actually open one.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl MenuVisitor for NavWalker<'_> {
    fn enter_level(&mut self, depth: usize) {
        let attributes = Attributes::new()
            .with("class", "menu sub-menu")
            .with("aria-labelledby", self.aria_labelledby.clone());
        self.markup
            .open_with(MENU_LEVEL, "ul", attributes, &MarkupArgs::at_depth(depth));
    }

    fn start_item(&mut self, item: &MenuItem, depth: usize, has_children: bool) {
        let id = link_id(item, self.instance, depth);
        if has_children && descends(depth, self.max_depth) {
            self.aria_labelledby = Some(id.clone());
        }

        let args = MarkupArgs::for_item(item, depth, has_children);
        self.markup
            .open_with(MENU_ITEM, "li", item_attributes(item, has_children), &args);
        self.markup
            .open_with(MENU_LINK, "a", link_attributes(item, &id), &args);
        self.markup.write_text(&item.title);
        self.markup.close_with(MENU_LINK, &args);
    }

    fn end_item(&mut self, item: &MenuItem, depth: usize, has_children: bool) {
        let args = MarkupArgs::for_item(item, depth, has_children);
        self.markup.close_with(MENU_ITEM, &args);
    }

    fn exit_level(&mut self, depth: usize) {
        self.markup.close_with(MENU_LEVEL, &MarkupArgs::at_depth(depth));
    }
}

/// Render `items` as a complete menu into `markup`.
///
/// Nothing is rendered for an empty menu.
pub fn render_menu(markup: &mut Markup, items: &[MenuItem], options: &MenuOptions) {
    if items.is_empty() {
        tracing::debug!("Skipping empty menu");
        return;
    }

    let attributes = Attributes::new()
        .with("id", options.menu_id.clone())
        .with("class", options.menu_class.as_str());
    markup.open(MENU_LIST, "ul", attributes);
    let mut walker = NavWalker::new(markup, options.instance).with_max_depth(options.max_depth);
    walk_menu(items, options.max_depth, &mut walker);
    markup.close(MENU_LIST);
}
