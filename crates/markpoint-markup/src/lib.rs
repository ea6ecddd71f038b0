//! Hookable HTML markup composition.
//!
//! Templates open, close and self-close elements by *identity* (a stable name
//! such as `"main"` or `"nav_menu_item"`) instead of writing tags directly.
//! Every identity exposes six hooks through which other code can retag the
//! element, change its attributes, suppress it or inject content around it
//! without editing the template:
//!
//! - [`MarkupHooks`]: shared hook registrations and settings, built once.
//! - [`Markup`]: the per-render registry that resolves hooks and tracks open
//!   identities.
//! - [`nav`]: menu rendering on top of the registry.
//! - [`format_attributes`] and the escaping functions used for every value.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use markpoint_markup::{Attributes, Markup, MarkupHooks};
//!
//! let mut hooks = MarkupHooks::new();
//! hooks.before("main", |markup, _| markup.write_str("<!-- main -->"), 10, 1);
//!
//! let mut markup = Markup::new(Arc::new(hooks));
//! markup.open("main", "main", [("class", "site-main")]);
//! markup.write_text("Hello");
//! markup.close("main");
//!
//! assert_eq!(
//!     markup.finish(),
//!     r#"<!-- main --><main class="site-main">Hello</main>"#
//! );
//! ```

mod args;
mod attributes;
mod escape;
mod hooks;
mod markup;
mod names;
pub mod nav;

pub use args::MarkupArgs;
pub use attributes::{AttrValue, Attributes, format_attributes};
pub use escape::{Escape, escape_html, escape_js, escape_url};
pub use hooks::{MarkupBus, MarkupHooks};
pub use markpoint_hooks::{DEFAULT_ARITY, DEFAULT_PRIORITY};
pub use markup::{DEBUG_ATTRIBUTE, Markup};
pub use names::HookNames;
pub use nav::MenuItem;
