//! Page templates.
//!
//! Each function renders one part of the page into a [`Markup`] registry.
//! Elements are addressed by identity so that hooks can change them.

use markpoint_config::Config;
use markpoint_markup::nav::{MenuOptions, render_menu};
use markpoint_markup::{Attributes, Markup};

use crate::page::{PageData, Post};

const HEADER_MENU_INSTANCE: usize = 1;
const FOOTER_MENU_INSTANCE: usize = 2;

/// Doctype, `html`, `head` and the opening `body` tag.
pub fn document_head(markup: &mut Markup, page: &PageData, config: &Config) {
    markup.write_str("<!DOCTYPE html>");
    markup.open(
        "document_html",
        "html",
        [
            ("dir", config.site.direction.as_str()),
            ("lang", config.site.language.as_str()),
        ],
    );

    markup.open("document_head", "head", Attributes::new());
    markup.write_str(r#"<meta charset="utf-8">"#);
    markup.write_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    markup.write_str("<title>");
    markup.write_text(page_title(page, config));
    markup.write_str("</title>");
    markup.close("document_head");

    markup.open(
        "document_body",
        "body",
        Attributes::new()
            .with("class", page.body_classes.join(" "))
            .with("itemscope", true)
            .with("itemtype", "http://schema.org/WebPage"),
    );
}

/// Site header with the primary menu, then the opening `main` tag.
pub fn header(markup: &mut Markup, page: &PageData, config: &Config) {
    markup.open(
        "header",
        "header",
        Attributes::new()
            .with("class", "site-header")
            .with("itemscope", true)
            .with("itemtype", "http://schema.org/WPHeader"),
    );
    render_menu(
        markup,
        &page.menu,
        &MenuOptions::default()
            .with_max_depth(config.menu.header_depth)
            .with_instance(HEADER_MENU_INSTANCE),
    );
    markup.close("header");

    markup.open("main", "main", [("class", "site-main")]);
}

/// One article.
pub fn post(markup: &mut Markup, post: &Post) {
    let mut class = String::from("entry");
    for extra in post.classes.iter().filter(|class| !class.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    markup.open(
        "post",
        "article",
        Attributes::new()
            .with("id", format!("post-{}", post.id))
            .with("class", class),
    );

    markup.open("post_title", "h1", [("class", "entry__title")]);
    markup.write_text(&post.title);
    markup.close("post_title");

    markup.open("post_summary", "div", [("class", "entry__summary")]);
    markup.write_text(&post.summary);
    markup.close("post_summary");

    markup.close("post");
}

/// Closing `main` tag, site footer with the primary menu, and the document end.
pub fn footer(markup: &mut Markup, page: &PageData, config: &Config) {
    markup.close("main");

    markup.open(
        "footer",
        "footer",
        Attributes::new()
            .with("class", "site-footer")
            .with("itemscope", true)
            .with("itemtype", "http://schema.org/WPFooter"),
    );
    render_menu(
        markup,
        &page.menu,
        &MenuOptions::default()
            .with_max_depth(config.menu.footer_depth)
            .with_instance(FOOTER_MENU_INSTANCE),
    );
    markup.close("footer");

    markup.close("document_body");
    markup.close("document_html");
}

fn page_title<'a>(page: &'a PageData, config: &'a Config) -> &'a str {
    if page.title.is_empty() {
        &config.site.title
    } else {
        &page.title
    }
}
