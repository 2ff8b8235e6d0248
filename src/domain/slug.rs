//! Title to URL slug conversion

use regex::Regex;
use std::sync::OnceLock;

/// Letters (any `L` category), decimal digits (`Nd`) and underscore.
fn slug_char_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[\p{L}\p{Nd}_]$").unwrap())
}

fn is_slug_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    slug_char_regex().is_match(c.encode_utf8(&mut buf))
}

/// Convert a note title into a URL slug.
///
/// The title is trimmed and lower-cased, then mapped character by character:
/// spaces and hyphens become `-`, `+` becomes `p`, letters, digits and `_`
/// are kept, and everything else is dropped. The first `:` ends the slug so
/// that a subtitle is not part of it.
///
/// The result can be empty and is not made unique.
pub fn slug_from_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.trim().to_lowercase().chars() {
        match c {
            ':' => break,
            ' ' | '-' => slug.push('-'),
            '+' => slug.push('p'),
            c if is_slug_char(c) => slug.push(c),
            _ => {}
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        assert_eq!(slug_from_title("Hello World"), "hello-world");
        assert_eq!(slug_from_title("a b"), "a-b");
    }

    #[test]
    fn test_plus_becomes_p() {
        assert_eq!(slug_from_title("C++ Things"), "cpp-things");
    }

    #[test]
    fn test_colon_truncates() {
        assert_eq!(slug_from_title("Title: Subtitle"), "title");
        assert_eq!(slug_from_title("My Note: A Story"), "my-note");
        assert_eq!(slug_from_title(": nothing before"), "");
    }

    #[test]
    fn test_trims_but_keeps_interior_spaces() {
        assert_eq!(slug_from_title("  Spaced  "), "spaced");
        assert_eq!(slug_from_title("  two  spaces "), "two--spaces");
    }

    #[test]
    fn test_drops_punctuation_and_keeps_underscore() {
        assert_eq!(slug_from_title("What's new?"), "whats-new");
        assert_eq!(slug_from_title("snake_case-title"), "snake_case-title");
        assert_eq!(slug_from_title("Tabs\tare\tdropped"), "tabsaredropped");
    }

    #[test]
    fn test_unicode_letters_pass_through() {
        assert_eq!(slug_from_title("Über Café"), "über-café");
    }

    #[test]
    fn test_only_decimal_digits_pass_through() {
        assert_eq!(slug_from_title("Part ½"), "part-");
        assert_eq!(slug_from_title("Chapter Ⅳ"), "chapter-");
        assert_eq!(slug_from_title("Level ٣"), "level-٣");
    }

    #[test]
    fn test_combining_marks_dropped() {
        assert_eq!(slug_from_title("हिंदी"), "हद");
    }

    #[test]
    fn test_empty_when_nothing_eligible() {
        assert_eq!(slug_from_title("!!!"), "");
        assert_eq!(slug_from_title(""), "");
    }
}
