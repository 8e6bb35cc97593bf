use once_cell::sync::Lazy;
use regex::Regex;

static BR_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("static pattern compiles"));

/// Replace `<br>`-style tags (any case, optional slash) with newlines.
///
/// Scanner descriptions embed these as soft line breaks; everything else is
/// treated as literal text.
pub fn sanitize_text(text: &str) -> String {
    BR_TAG.replace_all(text, "\n").into_owned()
}

/// Minimal HTML escaping for text interpolated into the rendered report.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_br_variants() {
        assert_eq!(sanitize_text("a<br>b"), "a\nb");
        assert_eq!(sanitize_text("a<BR/>b"), "a\nb");
        assert_eq!(sanitize_text("a<br />b"), "a\nb");
    }

    #[test]
    fn leaves_other_text_alone() {
        assert_eq!(sanitize_text("no tags here"), "no tags here");
        assert_eq!(sanitize_text("<b>bold</b>"), "<b>bold</b>");
    }

    #[test]
    fn escapes_html_specials() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }
}
