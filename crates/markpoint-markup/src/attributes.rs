//! Ordered HTML attribute sets and their serialization.

use std::fmt::Write;

use crate::escape::{Escape, escape_html};

/// Value of a single attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `name="escaped value"`.
    Text(String),
    /// `true` renders the bare name, `false` omits the attribute.
    Bool(bool),
    /// Omitted from the output.
    Null,
}

impl AttrValue {
    /// Text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bool(_) | Self::Null => None,
        }
    }

    /// Whether this value produces any output.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Insertion-ordered attribute map.
///
/// Setting an existing name replaces its value in place, so the rendered
/// order is the order in which names were first inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set `name` to `value`, replacing any previous value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Append `value` to the existing value of `name`, separated by a space.
    ///
    /// Existing text is kept when the incoming value is `Null` or `false`.
    /// Otherwise, when either side is not text (or `name` is absent), the
    /// incoming value replaces the existing one.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        let existing = self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == name);
        match (existing, value) {
            (Some((_, AttrValue::Text(current))), AttrValue::Text(extra)) => {
                current.push(' ');
                current.push_str(&extra);
            }
            (Some((_, AttrValue::Text(_))), AttrValue::Null | AttrValue::Bool(false)) => {}
            (Some((_, slot)), value) => *slot = value,
            (None, value) => self.entries.push((name, value)),
        }
    }

    /// Merge `other` into this set.
    ///
    /// With `overwrite`, values from `other` replace existing ones; otherwise
    /// they are [appended](Self::append).
    pub fn merge(&mut self, other: &Attributes, overwrite: bool) {
        for (name, value) in &other.entries {
            if overwrite {
                self.set(name.clone(), value.clone());
            } else {
                self.append(name.clone(), value.clone());
            }
        }
    }

    /// Remove `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.entries.iter().position(|(existing, _)| existing == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Value of `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Text value of `name`, if set to text.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_text)
    }

    /// Whether `name` is set (to any value, including null).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of entries, including null ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

impl<K: Into<String>, V: Into<AttrValue>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Serialize attributes for direct concatenation after a tag name.
///
/// Returns `""` when nothing renders; otherwise every rendered attribute is
/// preceded by a single space. Names are escaped as attribute values; values
/// use the strategy chosen by [`Escape::for_attribute`].
///
/// # Examples
///
/// ```
/// use markpoint_markup::{Attributes, format_attributes};
///
/// let attrs = Attributes::new()
///     .with("class", "btn")
///     .with("disabled", true)
///     .with("hidden", false)
///     .with("href", "/a b");
/// assert_eq!(format_attributes(&attrs), r#" class="btn" disabled href="/a%20b""#);
/// ```
#[must_use]
pub fn format_attributes(attributes: &Attributes) -> String {
    let mut out = String::new();
    for (name, value) in attributes.iter() {
        match value {
            AttrValue::Null | AttrValue::Bool(false) => {}
            AttrValue::Bool(true) => {
                out.push(' ');
                out.push_str(&escape_html(name));
            }
            AttrValue::Text(text) => {
                let escaped = Escape::for_attribute(name).apply(text);
                let _ = write!(out, r#" {}="{escaped}""#, escape_html(name));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_empty() {
        assert_eq!(format_attributes(&Attributes::new()), "");
    }

    #[test]
    fn test_format_skips_null_and_false() {
        let attrs = Attributes::new()
            .with("id", AttrValue::Null)
            .with("hidden", false)
            .with("title", None::<String>);
        assert_eq!(format_attributes(&attrs), "");
    }

    #[test]
    fn test_format_boolean_true_is_bare_name() {
        let attrs = Attributes::new().with("itemscope", true);
        assert_eq!(format_attributes(&attrs), " itemscope");
    }

    #[test]
    fn test_format_preserves_insertion_order() {
        let attrs = Attributes::from([("b", "2"), ("a", "1"), ("c", "3")]);
        assert_eq!(format_attributes(&attrs), r#" b="2" a="1" c="3""#);
    }

    #[test]
    fn test_format_escapes_names_and_values() {
        let attrs = Attributes::new()
            .with("data-x\"", "<b>")
            .with("onclick", "go('home')")
            .with("src", "javascript:alert(1)");
        assert_eq!(
            format_attributes(&attrs),
            r#" data-x&quot;="&lt;b&gt;" onclick="go(\'home\')" src="""#
        );
    }

    #[test]
    fn test_numbers_are_stringified() {
        let attrs = Attributes::new().with("tabindex", 0_i64).with("colspan", 2_usize);
        assert_eq!(format_attributes(&attrs), r#" tabindex="0" colspan="2""#);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = Attributes::from([("a", "1"), ("b", "2")]);
        attrs.set("a", "9");
        assert_eq!(format_attributes(&attrs), r#" a="9" b="2""#);
    }

    #[test]
    fn test_append_joins_with_space() {
        let mut attrs = Attributes::from([("class", "menu")]);
        attrs.append("class", "menu--open");
        attrs.append("id", "main");
        assert_eq!(attrs.get_text("class"), Some("menu menu--open"));
        assert_eq!(attrs.get_text("id"), Some("main"));
    }

    #[test]
    fn test_append_non_text_replaces() {
        let mut attrs = Attributes::from([("hidden", true)]);
        attrs.append("hidden", "until-found");
        assert_eq!(attrs.get_text("hidden"), Some("until-found"));

        attrs.append("hidden", true);
        assert_eq!(attrs.get("hidden"), Some(&AttrValue::Bool(true)));
        attrs.append("hidden", false);
        assert_eq!(attrs.get("hidden"), Some(&AttrValue::Bool(false)));
    }

    #[test]
    fn test_append_empty_value_keeps_text() {
        let mut attrs = Attributes::from([("class", "menu"), ("id", "primary")]);
        attrs.append("class", AttrValue::Null);
        attrs.append("id", false);
        assert_eq!(format_attributes(&attrs), r#" class="menu" id="primary""#);
    }

    #[test]
    fn test_merge_without_overwrite_keeps_text_on_null() {
        let mut attrs = Attributes::from([("title", "Home")]);
        attrs.merge(&Attributes::new().with("title", AttrValue::Null), false);
        assert_eq!(attrs.get_text("title"), Some("Home"));

        attrs.merge(&Attributes::new().with("title", AttrValue::Null), true);
        assert!(!attrs.get("title").is_some_and(AttrValue::is_rendered));
    }

    #[test]
    fn test_merge_without_overwrite_appends() {
        let mut attrs = Attributes::from([("a", "1"), ("b", "2")]);
        attrs.merge(&Attributes::from([("b", "3")]), false);
        assert_eq!(format_attributes(&attrs), r#" a="1" b="2 3""#);
    }

    #[test]
    fn test_merge_with_overwrite_replaces() {
        let mut attrs = Attributes::from([("a", "1"), ("b", "2")]);
        attrs.merge(&Attributes::from([("b", "3"), ("c", "4")]), true);
        assert_eq!(format_attributes(&attrs), r#" a="1" b="3" c="4""#);
    }

    #[test]
    fn test_remove() {
        let mut attrs = Attributes::from([("a", "1"), ("b", "2")]);
        assert_eq!(attrs.remove("a"), Some(AttrValue::from("1")));
        assert_eq!(attrs.remove("a"), None);
        assert_eq!(attrs.len(), 1);
        assert!(!attrs.contains("a"));
    }
}
