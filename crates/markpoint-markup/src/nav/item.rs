//! Menu item model consumed by the walker.

/// A node of a navigation menu tree.
///
/// Items are supplied by the menu source and only read by the walker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuItem {
    /// Identifier, unique within the menu.
    pub id: u64,
    /// Link text (rendered escaped).
    pub title: String,
    /// Target URL. Empty renders a link without `href`.
    pub url: String,
    /// Link target such as `_blank`. Empty for none.
    pub target: String,
    /// Link relation (`rel`). Empty for none.
    pub rel: String,
    /// Tooltip text (`title` attribute). Empty for none.
    pub attr_title: String,
    /// Extra CSS classes for the list item.
    pub classes: Vec<String>,
    /// This item is the page being rendered.
    pub current: bool,
    /// This item is an ancestor of the current item.
    pub current_ancestor: bool,
    /// This item is the direct parent of the current item.
    pub current_parent: bool,
    /// Nested items.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Create an item with a title and URL.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Builder: append a child item.
    #[must_use]
    pub fn with_child(mut self, child: MenuItem) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: mark as the current page.
    #[must_use]
    pub fn with_current(mut self) -> Self {
        self.current = true;
        self
    }

    /// Builder: set the link target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Whether the item is current or contains the current item.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current || self.current_ancestor || self.current_parent
    }

    /// Non-empty extra classes.
    pub fn css_classes(&self) -> impl Iterator<Item = &str> {
        self.classes
            .iter()
            .map(String::as_str)
            .filter(|class| !class.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        let mut item = MenuItem::new(1, "Home", "/");
        assert!(!item.is_active());

        item.current_parent = true;
        assert!(item.is_active());

        let item = MenuItem::new(2, "About", "/about").with_current();
        assert!(item.is_active());
    }

    #[test]
    fn test_css_classes_skip_empty() {
        let item = MenuItem {
            classes: vec![String::new(), "featured".to_owned(), String::new()],
            ..MenuItem::default()
        };
        assert_eq!(item.css_classes().collect::<Vec<_>>(), vec!["featured"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"id": 3, "title": "Blog", "children": [{"id": 4, "title": "News", "current": true}]}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, 3);
        assert_eq!(item.url, "");
        assert_eq!(item.children.len(), 1);
        assert!(item.children[0].current);
        assert!(item.children[0].children.is_empty());
    }
}
