//! Page data consumed by the templates.

use std::path::Path;

use markpoint_markup::MenuItem;
use serde::Deserialize;

use crate::ThemeError;

/// Everything needed to render one page.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageData {
    /// Page title. Falls back to the site title when empty.
    pub title: String,
    /// Classes of the `body` element.
    pub body_classes: Vec<String>,
    /// Articles rendered inside `main`.
    pub posts: Vec<Post>,
    /// Primary menu, rendered in the header and the footer.
    pub menu: Vec<MenuItem>,
}

/// A single article.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Post identifier, used for the `post-{id}` element id.
    pub id: u64,
    /// Post title (plain text).
    pub title: String,
    /// Post summary (plain text).
    pub summary: String,
    /// Extra classes of the article element.
    pub classes: Vec<String>,
}

impl PageData {
    /// Parse page data from JSON.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON page file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}
