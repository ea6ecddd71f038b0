//! Default theme for markpoint.
//!
//! Renders complete HTML pages from [`PageData`] through the markup
//! registry. All structural elements are addressed by identity, so every
//! part of the page can be customized with hooks registered on the
//! [`MarkupHooks`] passed to [`Theme::new`]:
//!
//! | Identity                                         | Element               |
//! |--------------------------------------------------|-----------------------|
//! | `document_html`, `document_head`, `document_body`| document skeleton     |
//! | `header`, `main`, `footer`                       | page regions          |
//! | `post`, `post_title`, `post_summary`             | articles              |
//! | `nav_menu_list`, `nav_menu`, `nav_menu_item`, `nav_menu_link` | menus    |

mod page;
pub mod templates;

use std::path::PathBuf;
use std::sync::Arc;

use markpoint_config::Config;
use markpoint_markup::{Markup, MarkupHooks};

pub use page::{PageData, Post};

/// Theme error.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Page file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the page file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Page data is not valid JSON for [`PageData`].
    #[error("Invalid page data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create an empty hook set configured from `config`.
///
/// Register customizations on the result, then pass it to [`Theme::new`].
#[must_use]
pub fn markup_hooks(config: &Config) -> MarkupHooks {
    MarkupHooks::new()
        .with_prefix(config.markup.hook_prefix.as_str())
        .with_debug(config.markup.debug)
}

/// Page renderer.
///
/// Hooks are shared by all renders; each render gets its own [`Markup`].
#[derive(Debug)]
pub struct Theme {
    hooks: Arc<MarkupHooks>,
    config: Config,
}

impl Theme {
    /// Create a theme from finished hook registrations.
    #[must_use]
    pub fn new(hooks: MarkupHooks, config: Config) -> Self {
        Self {
            hooks: Arc::new(hooks),
            config,
        }
    }

    /// Shared hook registrations.
    #[must_use]
    pub fn hooks(&self) -> &Arc<MarkupHooks> {
        &self.hooks
    }

    /// Theme configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render a complete page.
    #[must_use]
    pub fn render_page(&self, page: &PageData) -> String {
        tracing::debug!(title = %page.title, posts = page.posts.len(), "Rendering page");

        let mut markup = Markup::new(Arc::clone(&self.hooks));
        templates::document_head(&mut markup, page, &self.config);
        templates::header(&mut markup, page, &self.config);
        for post in &page.posts {
            templates::post(&mut markup, post);
        }
        templates::footer(&mut markup, page, &self.config);
        markup.finish()
    }
}
