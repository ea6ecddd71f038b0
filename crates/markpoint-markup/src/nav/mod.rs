//! Navigation menus rendered through the markup registry.
//!
//! Menu identities:
//!
//! | Identity        | Default tag | Hook arguments                      |
//! |-----------------|-------------|-------------------------------------|
//! | `nav_menu_list` | `ul`        | none                                |
//! | `nav_menu`      | `ul`        | `depth` of the parent item          |
//! | `nav_menu_item` | `li`        | `item`, `depth`, `has_children`     |
//! | `nav_menu_link` | `a`         | `item`, `depth`, `has_children`     |

mod item;
mod walker;

pub use item::MenuItem;
pub use walker::{
    MenuOptions, MenuVisitor, NavWalker, item_attributes, link_attributes, link_id, render_menu,
    walk_menu,
};

/// Identity of the top-level menu list.
pub const MENU_LIST: &str = "nav_menu_list";
/// Identity of nested menu lists.
pub const MENU_LEVEL: &str = "nav_menu";
/// Identity of menu list items.
pub const MENU_ITEM: &str = "nav_menu_item";
/// Identity of menu links.
pub const MENU_LINK: &str = "nav_menu_link";
