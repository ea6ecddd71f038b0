//! Render-scoped markup registry.
//!
//! A [`Markup`] is created per render. It resolves tags and attributes
//! through the shared [`MarkupHooks`], runs the four action points, tracks
//! which identities are open and collects the rendered output.

use std::collections::HashMap;
use std::sync::Arc;

use crate::args::MarkupArgs;
use crate::attributes::{Attributes, format_attributes};
use crate::escape::escape_html;
use crate::hooks::MarkupHooks;

/// Attribute naming the identity of an element when debug output is on.
pub const DEBUG_ATTRIBUTE: &str = "data-markup-id";

/// Markup registry for a single render.
///
/// Every operation has a return form (`get_open`, `get_close`,
/// `get_selfclose`) and a print form (`open`, `close`, `selfclose`) that
/// writes the same text into the current output buffer.
///
/// Re-opening an identity that is already open pushes another record: the
/// next close uses the most recently opened tag and the identity stays open
/// until every open has been closed.
///
/// `append` actions run while the identity is still open. A close removes
/// the record it started with, so an `append` action that opens the same
/// identity again leaves its own record in place.
#[derive(Debug)]
pub struct Markup {
    hooks: Arc<MarkupHooks>,
    open: HashMap<String, Vec<String>>,
    buffers: Vec<String>,
}

impl Markup {
    /// Create a registry reading hooks from `hooks`.
    #[must_use]
    pub fn new(hooks: Arc<MarkupHooks>) -> Self {
        Self {
            hooks,
            open: HashMap::new(),
            buffers: vec![String::new()],
        }
    }

    /// Shared hook configuration.
    #[must_use]
    pub fn hooks(&self) -> &Arc<MarkupHooks> {
        &self.hooks
    }

    /// Whether `id` is currently open.
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains_key(id)
    }

    /// Identities currently open, in no particular order.
    pub fn open_ids(&self) -> impl Iterator<Item = &str> {
        self.open.keys().map(String::as_str)
    }

    /// Opening tag for `id`, with no hook arguments.
    pub fn get_open(&mut self, id: &str, tag: &str, attributes: impl Into<Attributes>) -> String {
        self.get_open_with(id, tag, attributes, &MarkupArgs::default())
    }

    /// Opening tag for `id`.
    ///
    /// Returns `""` and records nothing when the tag filters resolve to no
    /// tag. Otherwise the identity is recorded as open with the resolved tag.
    pub fn get_open_with(
        &mut self,
        id: &str,
        tag: &str,
        attributes: impl Into<Attributes>,
        args: &MarkupArgs,
    ) -> String {
        let hooks = Arc::clone(&self.hooks);
        let names = hooks.names(id);

        let Some(tag) = self.resolve_tag(&hooks, &names.tag, tag, args) else {
            tracing::debug!(id, "Markup suppressed");
            return String::new();
        };

        let before = self.capture(|markup| hooks.bus().do_action(&names.before, markup, args));
        self.open.entry(id.to_owned()).or_default().push(tag.clone());
        let attributes = self.attributes_for(id, attributes, args);
        let prepend = self.capture(|markup| hooks.bus().do_action(&names.prepend, markup, args));

        format!(
            "{before}<{}{}>{prepend}",
            escape_html(&tag),
            format_attributes(&attributes)
        )
    }

    /// Print form of [`get_open`](Self::get_open).
    pub fn open(&mut self, id: &str, tag: &str, attributes: impl Into<Attributes>) {
        let html = self.get_open(id, tag, attributes);
        self.write_str(&html);
    }

    /// Print form of [`get_open_with`](Self::get_open_with).
    pub fn open_with(
        &mut self,
        id: &str,
        tag: &str,
        attributes: impl Into<Attributes>,
        args: &MarkupArgs,
    ) {
        let html = self.get_open_with(id, tag, attributes, args);
        self.write_str(&html);
    }

    /// Closing tag for `id`, with no hook arguments.
    pub fn get_close(&mut self, id: &str) -> String {
        self.get_close_with(id, &MarkupArgs::default())
    }

    /// Closing tag for `id`, using the tag recorded when it was opened.
    ///
    /// Returns `""` when `id` is not open.
    pub fn get_close_with(&mut self, id: &str, args: &MarkupArgs) -> String {
        if !self.is_open(id) {
            tracing::debug!(id, "Close without matching open");
            return String::new();
        }

        let hooks = Arc::clone(&self.hooks);
        let names = hooks.names(id);

        let index = self.open.get(id).map_or(0, Vec::len).saturating_sub(1);
        let append = self.capture(|markup| hooks.bus().do_action(&names.append, markup, args));
        let Some(tag) = self.remove_open(id, index) else {
            // An append action closed the identity itself.
            return append;
        };
        let after = self.capture(|markup| hooks.bus().do_action(&names.after, markup, args));

        format!("{append}</{}>{after}", escape_html(&tag))
    }

    /// Print form of [`get_close`](Self::get_close).
    pub fn close(&mut self, id: &str) {
        let html = self.get_close(id);
        self.write_str(&html);
    }

    /// Print form of [`get_close_with`](Self::get_close_with).
    pub fn close_with(&mut self, id: &str, args: &MarkupArgs) {
        let html = self.get_close_with(id, args);
        self.write_str(&html);
    }

    /// Self-closing tag for `id`, with no hook arguments.
    pub fn get_selfclose(&mut self, id: &str, tag: &str, attributes: impl Into<Attributes>) -> String {
        self.get_selfclose_with(id, tag, attributes, &MarkupArgs::default())
    }

    /// Self-closing tag for `id`. Never records `id` as open.
    pub fn get_selfclose_with(
        &mut self,
        id: &str,
        tag: &str,
        attributes: impl Into<Attributes>,
        args: &MarkupArgs,
    ) -> String {
        let hooks = Arc::clone(&self.hooks);
        let names = hooks.names(id);

        let Some(tag) = self.resolve_tag(&hooks, &names.tag, tag, args) else {
            tracing::debug!(id, "Markup suppressed");
            return String::new();
        };

        let before = self.capture(|markup| hooks.bus().do_action(&names.before, markup, args));
        let attributes = self.attributes_for(id, attributes, args);
        let after = self.capture(|markup| hooks.bus().do_action(&names.after, markup, args));

        format!(
            "{before}<{}{}/>{after}",
            escape_html(&tag),
            format_attributes(&attributes)
        )
    }

    /// Print form of [`get_selfclose`](Self::get_selfclose).
    pub fn selfclose(&mut self, id: &str, tag: &str, attributes: impl Into<Attributes>) {
        let html = self.get_selfclose(id, tag, attributes);
        self.write_str(&html);
    }

    /// Print form of [`get_selfclose_with`](Self::get_selfclose_with).
    pub fn selfclose_with(
        &mut self,
        id: &str,
        tag: &str,
        attributes: impl Into<Attributes>,
        args: &MarkupArgs,
    ) {
        let html = self.get_selfclose_with(id, tag, attributes, args);
        self.write_str(&html);
    }

    /// Attributes of `id` after the attribute filters and the debug attribute.
    pub fn attributes_for(
        &self,
        id: &str,
        attributes: impl Into<Attributes>,
        args: &MarkupArgs,
    ) -> Attributes {
        let name = self.hooks.names(id).attributes;
        let mut attributes = self
            .hooks
            .bus()
            .apply_filters(&name, attributes.into(), self, args);
        if self.hooks.debug() {
            attributes.set(DEBUG_ATTRIBUTE, id);
        }
        attributes
    }

    /// Run `f` with a fresh output buffer and return what it wrote.
    pub fn capture<F>(&mut self, f: F) -> String
    where
        F: FnOnce(&mut Self),
    {
        self.buffers.push(String::new());
        f(self);
        // The root buffer is never popped, so this is the one pushed above.
        self.buffers.pop().unwrap_or_default()
    }

    /// Write raw HTML to the current output buffer.
    pub fn write_str(&mut self, html: &str) {
        match self.buffers.last_mut() {
            Some(buffer) => buffer.push_str(html),
            None => self.buffers.push(html.to_owned()),
        }
    }

    /// Write text to the current output buffer, HTML-escaped.
    pub fn write_text(&mut self, text: &str) {
        self.write_str(&escape_html(text));
    }

    /// Output written so far to the current buffer.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.buffers.last().map_or("", String::as_str)
    }

    /// End the render and return its output.
    ///
    /// Identities still open at this point are reported with a warning.
    #[must_use]
    pub fn finish(self) -> String {
        if !self.open.is_empty() {
            let mut ids: Vec<&str> = self.open_ids().collect();
            ids.sort_unstable();
            tracing::warn!(?ids, "Render finished with open markup");
        }
        self.buffers.concat()
    }

    fn resolve_tag(
        &self,
        hooks: &MarkupHooks,
        name: &str,
        tag: &str,
        args: &MarkupArgs,
    ) -> Option<String> {
        hooks
            .bus()
            .apply_filters(name, Some(tag.to_owned()), self, args)
            .filter(|tag| !tag.is_empty())
    }

    fn remove_open(&mut self, id: &str, index: usize) -> Option<String> {
        let tags = self.open.get_mut(id)?;
        let tag = (index < tags.len()).then(|| tags.remove(index));
        if tags.is_empty() {
            self.open.remove(id);
        }
        tag
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::new(Arc::new(MarkupHooks::new()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn markup_with(configure: impl FnOnce(&mut MarkupHooks)) -> Markup {
        let mut hooks = MarkupHooks::new();
        configure(&mut hooks);
        Markup::new(Arc::new(hooks))
    }

    #[test]
    fn test_open_and_close_plain() {
        let mut markup = Markup::default();
        assert_eq!(
            markup.get_open("main", "div", [("class", "site-main")]),
            r#"<div class="site-main">"#
        );
        assert!(markup.is_open("main"));
        assert_eq!(markup.get_close("main"), "</div>");
        assert!(!markup.is_open("main"));
    }

    #[test]
    fn test_close_never_opened_is_empty() {
        let mut markup = Markup::default();
        assert_eq!(markup.get_close("sidebar"), "");
        assert_eq!(markup.finish(), "");
    }

    #[test]
    fn test_close_uses_filtered_tag() {
        let mut markup = markup_with(|hooks| hooks.retag("main", "section", 10));
        assert_eq!(markup.get_open("main", "div", Attributes::new()), "<section>");
        assert_eq!(markup.get_close("main"), "</section>");
    }

    #[test]
    fn test_empty_tag_suppresses() {
        let mut markup = markup_with(|hooks| hooks.retag("main", "", 10));
        assert_eq!(markup.get_open("main", "div", Attributes::new()), "");
        assert!(!markup.is_open("main"));
        assert_eq!(markup.get_close("main"), "");
    }

    #[test]
    fn test_reopen_closes_most_recent_tag_first() {
        let mut markup = Markup::default();
        markup.open("list", "ul", Attributes::new());
        markup.open("list", "ol", Attributes::new());
        markup.close("list");
        assert!(markup.is_open("list"));
        markup.close("list");
        assert!(!markup.is_open("list"));
        assert_eq!(markup.finish(), "<ul><ol></ol></ul>");
    }

    #[test]
    fn test_append_action_reopening_same_identity() {
        let mut markup = markup_with(|hooks| {
            hooks.append(
                "list",
                |m, args| {
                    if args.depth == Some(0) {
                        m.open("list", "ol", Attributes::new());
                    }
                },
                10,
                2,
            );
        });
        markup.open("list", "ul", Attributes::new());
        markup.close_with("list", &MarkupArgs::at_depth(0));
        assert!(markup.is_open("list"));
        markup.close("list");
        assert!(!markup.is_open("list"));
        assert_eq!(markup.finish(), "<ul><ol></ul></ol>");
    }

    #[test]
    fn test_append_action_closing_same_identity() {
        let mut markup = markup_with(|hooks| {
            hooks.append(
                "box",
                |m, args| {
                    if args.depth == Some(0) {
                        m.close("box");
                    }
                },
                10,
                2,
            );
        });
        markup.open("box", "div", Attributes::new());
        markup.close_with("box", &MarkupArgs::at_depth(0));
        assert!(!markup.is_open("box"));
        assert_eq!(markup.finish(), "<div></div>");
    }

    #[test]
    fn test_selfclose_leaves_no_record() {
        let mut markup = Markup::default();
        assert_eq!(
            markup.get_selfclose("logo", "img", [("src", "/logo.png")]),
            r#"<img src="/logo.png"/>"#
        );
        assert!(!markup.is_open("logo"));
        assert_eq!(markup.open_ids().count(), 0);
    }

    #[test]
    fn test_action_points_surround_element() {
        let mut markup = markup_with(|hooks| {
            hooks.before("box", |m, _| m.write_str("1"), 10, 1);
            hooks.prepend("box", |m, _| m.write_str("2"), 10, 1);
            hooks.append("box", |m, _| m.write_str("3"), 10, 1);
            hooks.after("box", |m, _| m.write_str("4"), 10, 1);
        });
        markup.open("box", "div", Attributes::new());
        markup.write_str("body");
        markup.close("box");
        assert_eq!(markup.finish(), "1<div>2body3</div>4");
    }

    #[test]
    fn test_actions_see_open_state() {
        let mut markup = markup_with(|hooks| {
            hooks.prepend(
                "box",
                |m, _| {
                    let state = if m.is_open("box") { "open" } else { "closed" };
                    m.write_str(state);
                },
                10,
                1,
            );
            hooks.after(
                "box",
                |m, _| {
                    let state = if m.is_open("box") { "open" } else { "closed" };
                    m.write_str(state);
                },
                10,
                1,
            );
        });
        markup.open("box", "div", Attributes::new());
        markup.close("box");
        assert_eq!(markup.finish(), "<div>open</div>closed");
    }

    #[test]
    fn test_actions_may_render_nested_markup() {
        let mut markup = markup_with(|hooks| {
            hooks.prepend(
                "card",
                |m, _| {
                    m.open("card_title", "h2", Attributes::new());
                    m.write_text("Tom & Jerry");
                    m.close("card_title");
                },
                10,
                1,
            );
        });
        let html = markup.get_open("card", "div", Attributes::new());
        assert_eq!(html, "<div><h2>Tom &amp; Jerry</h2>");
        assert_eq!(markup.as_str(), "");
    }

    #[test]
    fn test_debug_attribute() {
        let hooks = MarkupHooks::new().with_debug(true);
        let mut markup = Markup::new(Arc::new(hooks));
        assert_eq!(
            markup.get_open("main", "div", [("class", "site-main")]),
            r#"<div class="site-main" data-markup-id="main">"#
        );
        assert_eq!(
            markup.get_selfclose("rule", "hr", Attributes::new()),
            r#"<hr data-markup-id="rule"/>"#
        );
    }

    #[test]
    fn test_tag_is_escaped() {
        let mut markup = Markup::default();
        assert_eq!(markup.get_open("x", "d\"iv", Attributes::new()), "<d&quot;iv>");
        assert_eq!(markup.get_close("x"), "</d&quot;iv>");
    }

    #[test]
    fn test_args_reach_hooks() {
        let mut markup = markup_with(|hooks| {
            hooks.retag_with(
                "level",
                |tag, _, args| if args.depth == Some(0) { tag } else { Some("ol".to_owned()) },
                10,
                2,
            );
        });
        let top = markup.get_open_with("level", "ul", Attributes::new(), &MarkupArgs::at_depth(0));
        let nested = markup.get_open_with("level", "ul", Attributes::new(), &MarkupArgs::at_depth(1));
        assert_eq!(top, "<ul>");
        assert_eq!(nested, "<ol>");
    }

    #[test]
    fn test_capture_nests() {
        let mut markup = Markup::default();
        markup.write_str("a");
        let inner = markup.capture(|m| {
            m.write_str("b");
            let deeper = m.capture(|m| m.write_str("c"));
            m.write_str(&deeper.to_uppercase());
        });
        assert_eq!(inner, "bC");
        assert_eq!(markup.finish(), "a");
    }

    #[test]
    fn test_finish_with_open_markup_still_returns_output() {
        let mut markup = Markup::default();
        markup.open("main", "main", Attributes::new());
        assert_eq!(markup.finish(), "<main>");
    }
}
