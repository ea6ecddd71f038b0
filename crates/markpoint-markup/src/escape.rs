//! Escaping functions for attribute values, URLs and inline script.
//!
//! All functions are total: any input produces some escaped output, and the
//! worst case for a hostile URL is the empty string.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Schemes accepted by [`escape_url`]. Anything else is dropped.
const ALLOWED_PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs", "gopher", "nntp",
    "feed", "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// Bytes that are percent-encoded in URLs before entity escaping.
const URL_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Escaping applied to an attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Escape {
    /// Generic attribute-value escaping ([`escape_html`]).
    Attribute,
    /// URL sanitizing ([`escape_url`]).
    Url,
    /// Inline script string escaping ([`escape_js`]).
    Script,
}

/// Attribute names with a dedicated strategy. Unlisted names use [`Escape::Attribute`].
const STRATEGIES: &[(&str, Escape)] = &[
    ("href", Escape::Url),
    ("src", Escape::Url),
    ("action", Escape::Url),
    ("onclick", Escape::Script),
];

impl Escape {
    /// Strategy for the value of the attribute `name`.
    #[must_use]
    pub fn for_attribute(name: &str) -> Self {
        STRATEGIES
            .iter()
            .find(|(known, _)| *known == name)
            .map_or(Self::Attribute, |(_, escape)| *escape)
    }

    /// Escape `value` with this strategy.
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Attribute => escape_html(value),
            Self::Url => escape_url(value),
            Self::Script => escape_js(value),
        }
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Sanitize a URL for use in an attribute.
///
/// - Surrounding whitespace is trimmed.
/// - Spaces, control characters, non-ASCII and `" < > \ ^ ` { | }` are percent-encoded.
/// - URLs with a scheme outside the allowed protocol list yield `""`.
/// - `&` becomes `&#038;` and `'` becomes `&#039;`.
///
/// Relative URLs (`/path`, `#frag`, `?q=1`, `page`) pass through.
///
/// # Examples
///
/// ```
/// use markpoint_markup::escape_url;
///
/// assert_eq!(escape_url("/about us"), "/about%20us");
/// assert_eq!(escape_url("https://a.test/?x=1&y=2"), "https://a.test/?x=1&#038;y=2");
/// assert_eq!(escape_url("javascript:alert(1)"), "");
/// ```
#[must_use]
pub fn escape_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    let encoded = utf8_percent_encode(url, URL_UNSAFE).to_string();
    if let Some(scheme) = scheme_of(&encoded)
        && !ALLOWED_PROTOCOLS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
    {
        tracing::debug!(scheme, "Dropping URL with disallowed scheme");
        return String::new();
    }

    encoded
        .replace("&amp;", "&")
        .replace('&', "&#038;")
        .replace('\'', "&#039;")
}

/// Escape a string for an inline script attribute such as `onclick`.
///
/// HTML specials other than `'` become entities, `'` and `\` are
/// backslash-escaped, newlines become `\n` and carriage returns are dropped.
#[must_use]
pub fn escape_js(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("\\'"),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Extract the scheme of `url`, if it has one.
///
/// A scheme is a leading run of `[A-Za-z][A-Za-z0-9+.-]*` terminated by `:`.
fn scheme_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let candidate = &url[..colon];
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_strategy_table() {
        assert_eq!(Escape::for_attribute("href"), Escape::Url);
        assert_eq!(Escape::for_attribute("src"), Escape::Url);
        assert_eq!(Escape::for_attribute("action"), Escape::Url);
        assert_eq!(Escape::for_attribute("onclick"), Escape::Script);
        assert_eq!(Escape::for_attribute("class"), Escape::Attribute);
        assert_eq!(Escape::for_attribute("HREF"), Escape::Attribute);
    }

    #[test]
    fn test_escape_url_relative_paths_pass_through() {
        assert_eq!(escape_url("/about"), "/about");
        assert_eq!(escape_url("#top"), "#top");
        assert_eq!(escape_url("?page=2"), "?page=2");
        assert_eq!(escape_url("contact"), "contact");
    }

    #[test]
    fn test_escape_url_trims_and_encodes() {
        assert_eq!(escape_url("  /a b  "), "/a%20b");
        assert_eq!(escape_url("/x\"><script>"), "/x%22%3E%3Cscript%3E");
        assert_eq!(escape_url("/caf\u{e9}"), "/caf%C3%A9");
    }

    #[test]
    fn test_escape_url_entities() {
        assert_eq!(escape_url("/?a=1&b=2"), "/?a=1&#038;b=2");
        assert_eq!(escape_url("/?a=1&amp;b=2"), "/?a=1&#038;b=2");
        assert_eq!(escape_url("/it's"), "/it&#039;s");
    }

    #[test]
    fn test_escape_url_allowed_schemes() {
        assert_eq!(escape_url("https://example.com"), "https://example.com");
        assert_eq!(escape_url("HTTP://example.com"), "HTTP://example.com");
        assert_eq!(escape_url("mailto:me@example.com"), "mailto:me@example.com");
        assert_eq!(escape_url("tel:+123"), "tel:+123");
    }

    #[test]
    fn test_escape_url_rejects_other_schemes() {
        assert_eq!(escape_url("javascript:alert(1)"), "");
        assert_eq!(escape_url("JavaScript:alert(1)"), "");
        assert_eq!(escape_url("data:text/html;base64,xyz"), "");
    }

    #[test]
    fn test_escape_url_obfuscated_scheme_is_not_a_scheme() {
        // The tab is encoded, so the prefix no longer parses as a scheme and
        // the browser would treat the value as a relative path.
        assert_eq!(escape_url("java\tscript:x"), "java%09script:x");
    }

    #[test]
    fn test_escape_url_empty() {
        assert_eq!(escape_url(""), "");
        assert_eq!(escape_url("   "), "");
    }

    #[test]
    fn test_escape_js() {
        assert_eq!(escape_js("alert('hi')"), r"alert(\'hi\')");
        assert_eq!(escape_js("a\r\nb"), r"a\nb");
        assert_eq!(escape_js(r#"x="1" & y<2"#), "x=&quot;1&quot; &amp; y&lt;2");
        assert_eq!(escape_js(r"back\slash"), r"back\\slash");
    }
}
