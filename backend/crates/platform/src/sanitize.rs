//! Free-text Input Sanitization
//!
//! Normalizes untrusted form fields before validation and storage.

/// Sanitize an optional free-text input.
///
/// The result is trimmed, has SQL-significant punctuation (`;`, `"`, `'`)
/// removed, and has the remaining HTML-significant characters (`&`, `<`,
/// `>`) entity-escaped. Stripping happens before escaping so that entity
/// text produced by the escape step is never mangled.
///
/// `None` yields an empty string. Total - never fails.
pub fn sanitize(input: Option<&str>) -> String {
    let trimmed = match input {
        Some(s) => s.trim(),
        None => return String::new(),
    };

    let mut out = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            ';' | '"' | '\'' => {}
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Sanitize and treat empty results as absent.
pub fn sanitize_optional(input: Option<&str>) -> Option<String> {
    let cleaned = sanitize(input);
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_yields_empty() {
        assert_eq!(sanitize(None), "");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize(Some("  Maria Silva  ")), "Maria Silva");
    }

    #[test]
    fn test_strips_sql_punctuation() {
        assert_eq!(sanitize(Some("Rua 7; DROP TABLE--")), "Rua 7 DROP TABLE--");
        assert_eq!(sanitize(Some("O'Neill")), "ONeill");
        assert_eq!(sanitize(Some("a\"b")), "ab");
    }

    #[test]
    fn test_escapes_html() {
        assert_eq!(
            sanitize(Some("<script>alert(1)</script>")),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(sanitize(Some("a & b")), "a &amp; b");
    }

    #[test]
    fn test_strip_happens_before_escape() {
        // The semicolon inside the produced entity must survive.
        assert_eq!(sanitize(Some("a<b;c")), "a&lt;bc");
    }

    #[test]
    fn test_sanitize_optional() {
        assert_eq!(sanitize_optional(Some(" x ")), Some("x".to_string()));
        assert_eq!(sanitize_optional(Some("   ")), None);
        assert_eq!(sanitize_optional(Some("';;'")), None);
        assert_eq!(sanitize_optional(None), None);
    }
}
