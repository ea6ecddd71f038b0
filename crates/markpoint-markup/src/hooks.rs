//! Application-wide markup hook configuration.
//!
//! [`MarkupHooks`] wraps the [`HookBus`] used by every [`Markup`] render
//! together with the process-wide settings that shape hook dispatch (the
//! hook-name prefix and the debug flag). It also provides the customization
//! helpers: each one is a thin registration on the underlying bus under the
//! hook names of [`HookNames`].
//!
//! Build it once during setup and share it behind an `Arc`:
//!
//! ```
//! use std::sync::Arc;
//! use markpoint_markup::{Attributes, Markup, MarkupHooks};
//!
//! let mut hooks = MarkupHooks::new();
//! hooks.retag("main", "section", 10);
//! hooks.merge_attributes("main", Attributes::from([("class", "wide")]), false, 10);
//!
//! let mut markup = Markup::new(Arc::new(hooks));
//! markup.open("main", "main", [("class", "site-main")]);
//! markup.close("main");
//! assert_eq!(markup.finish(), r#"<section class="site-main wide"></section>"#);
//! ```

use std::fmt;

use markpoint_hooks::HookBus;

use crate::args::MarkupArgs;
use crate::attributes::Attributes;
use crate::markup::Markup;
use crate::names::HookNames;

/// Hook bus specialised for markup rendering.
pub type MarkupBus = HookBus<Markup, MarkupArgs>;

/// Shared hook registrations and settings for markup rendering.
pub struct MarkupHooks {
    bus: MarkupBus,
    prefix: String,
    debug: bool,
}

impl MarkupHooks {
    /// Create an empty configuration with no prefix and debug off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bus: MarkupBus::new(),
            prefix: String::new(),
            debug: false,
        }
    }

    /// Prefix prepended to every hook name.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Render a `data-markup-id` attribute on every opening and self-closing tag.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Hook-name prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether debug attributes are rendered.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Hook names for the markup identity `id`.
    #[must_use]
    pub fn names(&self, id: &str) -> HookNames {
        HookNames::new(&self.prefix, id)
    }

    /// The underlying bus.
    #[must_use]
    pub fn bus(&self) -> &MarkupBus {
        &self.bus
    }

    /// The underlying bus, for registering hooks directly by name.
    pub fn bus_mut(&mut self) -> &mut MarkupBus {
        &mut self.bus
    }

    /// Render `id` with `tag` instead of the tag passed by the template.
    pub fn retag(&mut self, id: &str, tag: impl Into<String>, priority: i32) {
        let tag = tag.into();
        self.bus.add_filter(
            self.names(id).tag,
            move |_: Option<String>, _: &Markup, _: &MarkupArgs| Some(tag.clone()),
            priority,
            1,
        );
    }

    /// Decide the tag of `id` with a callback.
    ///
    /// The callback receives the current tag (`None` if an earlier filter
    /// suppressed the element). Returning `None` or an empty string suppresses
    /// the element.
    pub fn retag_with<F>(&mut self, id: &str, callback: F, priority: i32, arity: usize)
    where
        F: Fn(Option<String>, &Markup, &MarkupArgs) -> Option<String> + Send + Sync + 'static,
    {
        self.bus.add_filter(self.names(id).tag, callback, priority, arity);
    }

    /// Suppress `id` entirely: neither its opening nor its closing tag render.
    pub fn suppress(&mut self, id: &str, priority: i32) {
        self.bus.add_filter(
            self.names(id).tag,
            |_: Option<String>, _: &Markup, _: &MarkupArgs| None,
            priority,
            1,
        );
    }

    /// Remove every tag filter of `id`.
    pub fn restore_tag(&mut self, id: &str) {
        let name = self.names(id).tag;
        self.bus.remove_all_filters(&name);
    }

    /// Remove the tag filters of `id` registered at `priority`.
    pub fn restore_tag_at(&mut self, id: &str, priority: i32) {
        let name = self.names(id).tag;
        self.bus.remove_filters_at(&name, priority);
    }

    /// Merge `attributes` into those of `id`.
    ///
    /// Existing values are replaced when `overwrite` is set and
    /// space-appended to otherwise.
    pub fn merge_attributes(&mut self, id: &str, attributes: Attributes, overwrite: bool, priority: i32) {
        self.bus.add_filter(
            self.names(id).attributes,
            move |mut current: Attributes, _: &Markup, _: &MarkupArgs| {
                current.merge(&attributes, overwrite);
                current
            },
            priority,
            1,
        );
    }

    /// Transform the attributes of `id` with a callback.
    pub fn filter_attributes<F>(&mut self, id: &str, callback: F, priority: i32, arity: usize)
    where
        F: Fn(Attributes, &Markup, &MarkupArgs) -> Attributes + Send + Sync + 'static,
    {
        self.bus
            .add_filter(self.names(id).attributes, callback, priority, arity);
    }

    /// Remove the attributes `names` from `id`.
    ///
    /// With a `scope`, the removal applies only while the markup identity
    /// `scope` is open.
    pub fn unset_attributes<I, N>(&mut self, id: &str, names: I, scope: Option<&str>, priority: i32)
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let scope = scope.map(str::to_owned);
        self.bus.add_filter(
            self.names(id).attributes,
            move |mut current: Attributes, markup: &Markup, _: &MarkupArgs| {
                if let Some(scope) = &scope
                    && !markup.is_open(scope)
                {
                    return current;
                }
                for name in &names {
                    current.remove(name);
                }
                current
            },
            priority,
            1,
        );
    }

    /// Remove every attribute filter of `id`.
    pub fn restore_attributes(&mut self, id: &str) {
        let name = self.names(id).attributes;
        self.bus.remove_all_filters(&name);
    }

    /// Remove the attribute filters of `id` registered at `priority`.
    pub fn restore_attributes_at(&mut self, id: &str, priority: i32) {
        let name = self.names(id).attributes;
        self.bus.remove_filters_at(&name, priority);
    }

    /// Run `callback` before the opening tag of `id`.
    pub fn before<F>(&mut self, id: &str, callback: F, priority: i32, arity: usize)
    where
        F: Fn(&mut Markup, &MarkupArgs) + Send + Sync + 'static,
    {
        self.bus.add_action(self.names(id).before, callback, priority, arity);
    }

    /// Run `callback` right after the opening tag of `id`.
    pub fn prepend<F>(&mut self, id: &str, callback: F, priority: i32, arity: usize)
    where
        F: Fn(&mut Markup, &MarkupArgs) + Send + Sync + 'static,
    {
        self.bus
            .add_action(self.names(id).prepend, callback, priority, arity);
    }

    /// Run `callback` right before the closing tag of `id`.
    pub fn append<F>(&mut self, id: &str, callback: F, priority: i32, arity: usize)
    where
        F: Fn(&mut Markup, &MarkupArgs) + Send + Sync + 'static,
    {
        self.bus.add_action(self.names(id).append, callback, priority, arity);
    }

    /// Run `callback` after the closing (or self-closing) tag of `id`.
    pub fn after<F>(&mut self, id: &str, callback: F, priority: i32, arity: usize)
    where
        F: Fn(&mut Markup, &MarkupArgs) + Send + Sync + 'static,
    {
        self.bus.add_action(self.names(id).after, callback, priority, arity);
    }
}

impl Default for MarkupHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MarkupHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkupHooks")
            .field("bus", &self.bus)
            .field("prefix", &self.prefix)
            .field("debug", &self.debug)
            .finish()
    }
}
