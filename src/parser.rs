//! Per-line classification for env source files.
//!
//! Each line of a source file is classified independently with a small token
//! scanner. The accepted entry shape is `KEY = "value"` with insignificant
//! whitespace around key and value and an optional trailing `#` comment:
//!
//! ```text
//! API_KEY = "abc123"        # inline comment
//! # whole-line comment
//! ```
//!
//! Values must be wrapped in double quotes and quotes cannot appear inside a
//! value. An entry with an empty quoted value (`KEY = ""`) is not recognized
//! and is skipped; this mirrors the documented limitation of the file format.
//! Anything that is not blank, a comment, or a well-formed entry is skipped
//! without an error.

/// Classification of a single source line.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Whitespace-only line.
    Blank,
    /// First non-whitespace character is `#`.
    Comment,
    /// A well-formed `key = "value"` entry, key and value already trimmed.
    Entry { key: &'a str, value: &'a str },
    /// Malformed in some way; skipped silently.
    Skip,
}

/// Classify one line of an env source file.
pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') {
        return Line::Comment;
    }

    let Some(eq) = line.find('=') else {
        return Line::Skip;
    };

    let key = line[..eq].trim();
    if key.is_empty() || key.contains('#') {
        return Line::Skip;
    }

    // Value must open with a double quote after the assignment.
    let rest = line[eq + 1..].trim_start();
    let Some(quoted) = rest.strip_prefix('"') else {
        return Line::Skip;
    };

    // Scan to the closing quote; an unterminated value is malformed.
    let Some(close) = quoted.find('"') else {
        return Line::Skip;
    };
    let value = &quoted[..close];
    if value.is_empty() {
        return Line::Skip;
    }

    // Only whitespace or an inline comment may follow the closing quote.
    let tail = quoted[close + 1..].trim();
    if !tail.is_empty() && !tail.starts_with('#') {
        return Line::Skip;
    }

    Line::Entry { key, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t  "), Line::Blank);
    }

    #[test]
    fn test_whole_line_comments() {
        assert_eq!(classify("# a comment"), Line::Comment);
        assert_eq!(classify("   \t# indented comment"), Line::Comment);
    }

    #[test]
    fn test_basic_entry() {
        assert_eq!(
            classify("key1 = \"value1\""),
            Line::Entry { key: "key1", value: "value1" }
        );
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        assert_eq!(
            classify("  \tkey2\t =   \"value2\"   "),
            Line::Entry { key: "key2", value: "value2" }
        );
        assert_eq!(
            classify("key3=\"value3\""),
            Line::Entry { key: "key3", value: "value3" }
        );
    }

    #[test]
    fn test_inline_comment_is_stripped() {
        assert_eq!(
            classify("key4 = \"value4\" # trailing comment"),
            Line::Entry { key: "key4", value: "value4" }
        );
        assert_eq!(
            classify("key4 = \"value4\"# no space before comment"),
            Line::Entry { key: "key4", value: "value4" }
        );
    }

    #[test]
    fn test_value_preserves_inner_content() {
        // '=' and '#' are fine inside the quoted span.
        assert_eq!(
            classify("url = \"http://host?a=b#frag\""),
            Line::Entry { key: "url", value: "http://host?a=b#frag" }
        );
    }

    #[test]
    fn test_empty_quoted_value_is_skipped() {
        // Documented limitation: "" is not a valid entry.
        assert_eq!(classify("key5 = \"\""), Line::Skip);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        assert_eq!(classify("no assignment here"), Line::Skip);
        assert_eq!(classify("key = unquoted"), Line::Skip);
        assert_eq!(classify("key = \"unterminated"), Line::Skip);
        assert_eq!(classify("= \"no key\""), Line::Skip);
        assert_eq!(classify("bad#key = \"v\""), Line::Skip);
        assert_eq!(classify("key = \"v\" trailing junk"), Line::Skip);
    }
}
