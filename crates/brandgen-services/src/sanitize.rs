//! Cleanup of raw model output into a bare HTML document.
//!
//! Models like to wrap their answer in markdown fences, pad it with blank
//! lines or leave literal escape sequences behind. `sanitize` removes those
//! artifacts and is idempotent: running it on its own output changes nothing.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\A\s*```(?:html)?[ \t]*\r?\n?").expect("leading fence pattern is valid")
});

static TRAILING_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\r?\n)?```\s*\z").expect("trailing fence pattern is valid")
});

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline run pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Remove literal two-character `\n` and `\r` sequences
    pub strip_escape_sequences: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            strip_escape_sequences: true,
        }
    }
}

fn collapse_newlines(text: &str) -> String {
    NEWLINE_RUN.replace_all(text, "\n\n").into_owned()
}

fn remove_escape_sequences(text: &str) -> String {
    let mut current = text.to_string();
    // Removal can splice a new sequence together ("\\nn"), so repeat until stable
    loop {
        let next = current.replace("\\n", "").replace("\\r", "");
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Strip fences, excess blank lines, stray backticks and (optionally) literal
/// escape sequences from a model reply.
pub fn sanitize(raw: &str, options: &SanitizeOptions) -> String {
    let text = LEADING_FENCE.replace(raw, "");
    let text = TRAILING_FENCE.replace(&text, "");
    let text = collapse_newlines(&text);
    let text = text.replace('`', "");
    let mut text = text.trim().to_string();

    if options.strip_escape_sequences {
        text = remove_escape_sequences(&text);
    }

    // Backtick and escape removal can join newline runs or expose edge whitespace
    collapse_newlines(&text).trim().to_string()
}

/// True when the text looks like a complete page: it opens with a doctype or
/// `<html>` tag and closes with `</html>`. Case-insensitive, ignores surrounding whitespace.
pub fn validate_html(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    (lowered.starts_with("<!doctype html") || lowered.starts_with("<html"))
        && lowered.ends_with("</html>")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>Acme</title></head>\n<body>Hi</body>\n</html>";

    fn clean(raw: &str) -> String {
        sanitize(raw, &SanitizeOptions::default())
    }

    #[test]
    fn test_strips_html_fences() {
        let raw = format!("```html\n{}\n```", PAGE);
        let cleaned = clean(&raw);

        assert_eq!(cleaned, PAGE);
        assert!(!cleaned.contains('`'));
        assert!(!cleaned.starts_with("```"));
        assert!(!cleaned.ends_with("```"));
    }

    #[test]
    fn test_strips_untagged_and_uppercase_fences() {
        assert_eq!(clean(&format!("```\n{}\n```\n", PAGE)), PAGE);
        assert_eq!(clean(&format!("```HTML\n{}```", PAGE)), PAGE);
        assert_eq!(clean(&format!("\n  ```html\n{}\n```  \n", PAGE)), PAGE);
    }

    #[test]
    fn test_collapses_newline_runs() {
        let cleaned = clean("<p>a</p>\n\n\n\n\n<p>b</p>");
        assert_eq!(cleaned, "<p>a</p>\n\n<p>b</p>");
        assert!(!cleaned.contains("\n\n\n"));
    }

    #[test]
    fn test_removes_stray_backticks() {
        assert_eq!(clean("<p>`code` here</p>"), "<p>code here</p>");
    }

    #[test]
    fn test_escape_sequences_are_configurable() {
        let raw = "<p>one\\ntwo\\r</p>";
        assert_eq!(clean(raw), "<p>onetwo</p>");

        let keep = SanitizeOptions {
            strip_escape_sequences: false,
        };
        assert_eq!(sanitize(raw, &keep), raw);
    }

    #[test]
    fn test_escape_removal_reaches_fixpoint() {
        assert_eq!(clean("a\\\\nnb"), "ab");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            PAGE.to_string(),
            format!("```html\n{}\n```", PAGE),
            "a\n\n`\n\nb".to_string(),
            "x \\n".to_string(),
            "\\n\n\n\\n\n\nbody".to_string(),
            "a\\\\nnb".to_string(),
            "   \n\n\n   ".to_string(),
            "``````".to_string(),
            "\r\n\r\n\r\n<html></html>\r\n".to_string(),
        ];

        for options in [
            SanitizeOptions::default(),
            SanitizeOptions {
                strip_escape_sequences: false,
            },
        ] {
            for input in &inputs {
                let once = sanitize(input, &options);
                let twice = sanitize(&once, &options);
                assert_eq!(once, twice, "not idempotent for {input:?}");
            }
        }
    }

    #[test]
    fn test_validate_html() {
        assert!(validate_html("<!DOCTYPE html>...</html>"));
        assert!(validate_html("  <!doctype HTML><html></html>\n"));
        assert!(validate_html("<html lang=\"en\"><body></body></HTML>"));
        assert!(!validate_html("<div>not a page</div>"));
        assert!(!validate_html("<!DOCTYPE html><html><body>"));
        assert!(!validate_html(""));
    }
}
