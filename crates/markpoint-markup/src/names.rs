//! Hook names derived from a markup identity.
//!
//! For identity `X` (and an optional prefix `P`) the public hook names are:
//!
//! | Hook                | Kind   | Name                    |
//! |---------------------|--------|-------------------------|
//! | tag                 | filter | `PX_markup`             |
//! | attributes          | filter | `PX_markup_attributes`  |
//! | before opening tag  | action | `PX_before_markup`      |
//! | after opening tag   | action | `PX_prepend_markup`     |
//! | before closing tag  | action | `PX_append_markup`      |
//! | after closing tag   | action | `PX_after_markup`       |

/// The six hook names of one markup identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookNames {
    /// Tag filter.
    pub tag: String,
    /// Attribute filter.
    pub attributes: String,
    /// Action fired before the opening tag.
    pub before: String,
    /// Action fired right after the opening tag.
    pub prepend: String,
    /// Action fired right before the closing tag.
    pub append: String,
    /// Action fired after the closing tag.
    pub after: String,
}

impl HookNames {
    /// Build the hook names for `id`, each prefixed with `prefix`.
    #[must_use]
    pub fn new(prefix: &str, id: &str) -> Self {
        let name = |suffix: &str| format!("{prefix}{id}_{suffix}");
        Self {
            tag: name("markup"),
            attributes: name("markup_attributes"),
            before: name("before_markup"),
            prepend: name("prepend_markup"),
            append: name("append_markup"),
            after: name("after_markup"),
        }
    }

    /// All names, filters first.
    #[must_use]
    pub fn all(&self) -> [&str; 6] {
        [
            self.tag.as_str(),
            self.attributes.as_str(),
            self.before.as_str(),
            self.prepend.as_str(),
            self.append.as_str(),
            self.after.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unprefixed_names() {
        let names = HookNames::new("", "main");
        assert_eq!(
            names.all(),
            [
                "main_markup",
                "main_markup_attributes",
                "main_before_markup",
                "main_prepend_markup",
                "main_append_markup",
                "main_after_markup",
            ]
        );
    }

    #[test]
    fn test_prefixed_names() {
        let names = HookNames::new("theme_", "post_title");
        assert_eq!(names.tag, "theme_post_title_markup");
        assert_eq!(names.after, "theme_post_title_after_markup");
    }
}
