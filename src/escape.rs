//! Neutralize markup-terminating sequences before source text is embedded.
//!
//! The preview document substitutes raw source text into an inline script
//! block. A literal `</script` inside that text would terminate the block
//! early and let the rest of the source escape into surrounding markup.
//! `<script` and `<!--` matter too: they drive the HTML script-data state
//! machine into its escaped states, where the builder's own closing tag can
//! be swallowed.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Sequences that can alter the script-data state machine: `<!--`,
/// `<script`, `</script` (tags matched case-insensitively).
static MARKUP_BREAKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(!--|/?script)").expect("markup breaker pattern")
});

/// Insert a backslash after `<` in every markup-breaking sequence.
///
/// `</script` becomes `<\/script`, `<script` becomes `<\script`, `<!--`
/// becomes `<\!--`. Inside string literals, comments, and regular
/// expressions the extra backslash is an identity escape, so the embedded
/// code keeps its meaning; at markup level the sequence no longer matches a
/// tag, so the script block stays unbroken.
pub(crate) fn neutralize_markup(source: &str) -> Cow<'_, str> {
    MARKUP_BREAKERS.replace_all(source, r"<\$1")
}

/// Escape a string for use inside a double-quoted HTML attribute value.
pub(crate) fn attribute_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutralizes_closing_tag() {
        let source = r#"const s = "</script><b>pwned</b>";"#;
        let out = neutralize_markup(source);
        assert!(!out.contains("</script"));
        assert!(out.contains(r"<\/script"));
    }

    #[test]
    fn test_neutralizes_any_case() {
        let out = neutralize_markup("'</ScRiPt >'");
        assert!(!out.to_lowercase().contains("</script"));
        assert!(out.contains(r"<\/ScRiPt"));
    }

    #[test]
    fn test_neutralizes_opening_tag_and_comment_open() {
        let out = neutralize_markup(r#"const t = "<!--<script>";"#);
        assert!(!out.contains("<!--"));
        assert!(!out.contains("<script"));
        assert!(out.contains(r"<\!--"));
        assert!(out.contains(r"<\script"));
    }

    #[test]
    fn test_plain_source_unchanged() {
        let source = "function ExampleComponent() { return <div>hi</div>; }";
        assert_eq!(neutralize_markup(source), source);
    }

    #[test]
    fn test_idempotent() {
        let once = neutralize_markup("x = '</script>';").into_owned();
        let twice = neutralize_markup(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_attribute_escape() {
        assert_eq!(
            attribute_escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_attribute_escape_plain() {
        assert_eq!(attribute_escape("no specials here"), "no specials here");
    }
}
