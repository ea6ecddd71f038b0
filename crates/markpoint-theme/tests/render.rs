//! Full page renders through the default theme.

use markpoint_config::Config;
use markpoint_markup::Attributes;
use markpoint_theme::{PageData, Theme, markup_hooks};
use pretty_assertions::assert_eq;

const PAGE: &str = r#"{
    "title": "Home",
    "body_classes": ["home"],
    "posts": [
        {"id": 1, "title": "Hello", "summary": "First"},
        {"id": 2, "title": "World", "summary": "Second"}
    ],
    "menu": [
        {"id": 10, "title": "Home", "url": "/", "current": true},
        {"id": 11, "title": "Docs", "url": "/docs", "children": [
            {"id": 12, "title": "Guide", "url": "/docs/guide"}
        ]}
    ]
}"#;

fn page() -> PageData {
    PageData::from_json(PAGE).unwrap()
}

#[test]
fn test_render_default_page() {
    let config = Config::default();
    let theme = Theme::new(markup_hooks(&config), config);

    let html = theme.render_page(&page());

    assert!(html.starts_with(r#"<!DOCTYPE html><html dir="ltr" lang="en-US"><head>"#));
    assert!(html.contains("<title>Home</title>"));
    assert!(html.contains(
        r#"<body class="home" itemscope itemtype="http://schema.org/WebPage"><header class="site-header""#
    ));
    assert!(html.contains(r#"<main class="site-main"><article id="post-1" class="entry">"#));
    assert!(html.contains(r#"<h1 class="entry__title">World</h1>"#));
    assert!(html.ends_with("</footer></body></html>"));

    // The header renders every level, the footer only the first one.
    assert!(html.contains(r#"id="link-12-11""#));
    assert!(!html.contains(r#"id="link-12-21""#));
    assert!(html.contains(r#"id="link-11-20""#));
    assert_eq!(html.matches("sub-menu").count(), 1);
    // Footer items keep the dropdown marker for their hidden children.
    assert_eq!(html.matches("menu__item--dropdown").count(), 2);
}

#[test]
fn test_render_with_customizations() {
    let config = Config::default();
    let mut hooks = markup_hooks(&config);
    hooks.retag("main", "section", 10);
    hooks.suppress("post_summary", 10);
    hooks.merge_attributes("post", Attributes::from([("class", "card")]), false, 10);
    hooks.before("main", |markup, _| markup.write_str("<!-- main -->"), 10, 1);
    hooks.unset_attributes("nav_menu_link", ["aria-current"], Some("footer"), 10);
    let theme = Theme::new(hooks, config);

    let html = theme.render_page(&page());

    assert!(html.contains(r#"<!-- main --><section class="site-main">"#));
    assert!(html.contains("</section><footer"));
    // Suppression drops the element, not its content.
    assert!(!html.contains("entry__summary"));
    assert!(html.contains("</h1>First</article>"));
    assert!(html.contains(r#"<article id="post-2" class="entry card">"#));
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
}

#[test]
fn test_render_with_prefix_and_debug() {
    let mut config = Config::default();
    config.markup.hook_prefix = "child_".to_owned();
    config.markup.debug = true;
    let mut hooks = markup_hooks(&config);
    hooks.retag("header", "div", 10);
    let theme = Theme::new(hooks, config);

    let html = theme.render_page(&page());

    assert!(html.contains(r#"<div class="site-header" itemscope itemtype="http://schema.org/WPHeader" data-markup-id="header">"#));
    assert!(html.contains(r#"<html dir="ltr" lang="en-US" data-markup-id="document_html">"#));
    assert!(theme.hooks().bus().has_filter("child_header_markup"));
}

#[test]
fn test_renders_are_independent() {
    let config = Config::default();
    let theme = Theme::new(markup_hooks(&config), config);

    let first = theme.render_page(&page());
    let second = theme.render_page(&page());

    assert_eq!(first, second);
}
