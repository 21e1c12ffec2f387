//! Widow prevention for short text runs.
//!
//! Binds the last two words of a line of text with a non-breaking space so a
//! single word never wraps onto its own line.

use std::sync::OnceLock;

use regex::Regex;

/// Non-breaking space inserted between the last two words.
pub const NBSP: char = '\u{00A0}';

fn last_gap() -> &'static Regex {
    static LAST_GAP: OnceLock<Regex> = OnceLock::new();
    LAST_GAP.get_or_init(|| {
        // Final space, last word, trailing punctuation, trailing whitespace
        Regex::new(r#" (\S+)([.,;!?"]*)\s*$"#).expect("static regex is valid")
    })
}

/// Trim `text` and replace the space before its last word with [`NBSP`].
///
/// Text with a single word is returned trimmed and otherwise unchanged.
///
/// ```
/// use folio_core::typography::bind_last_words;
///
/// assert_eq!(bind_last_words("  Hello brave world  "), "Hello brave\u{a0}world");
/// assert_eq!(bind_last_words("Solo"), "Solo");
/// ```
pub fn bind_last_words(text: &str) -> String {
    let trimmed = text.trim();
    last_gap()
        .replace(trimmed, |caps: &regex::Captures| {
            format!("{}{}{}", NBSP, &caps[1], &caps[2])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binds_final_pair() {
        assert_eq!(bind_last_words("one two three"), "one two\u{a0}three");
    }

    #[test]
    fn test_keeps_trailing_punctuation_with_word() {
        assert_eq!(bind_last_words("Hello there, friend."), "Hello there,\u{a0}friend.");
        assert_eq!(bind_last_words("She said \"yes\""), "She said\u{a0}\"yes\"");
    }

    #[test]
    fn test_single_word_untouched() {
        assert_eq!(bind_last_words("Contact"), "Contact");
        assert_eq!(bind_last_words("   "), "");
    }

    #[test]
    fn test_only_last_space_replaced() {
        let out = bind_last_words("a b c d");
        assert_eq!(out.matches(NBSP).count(), 1);
        assert!(out.ends_with("c\u{a0}d"));
    }

    #[test]
    fn test_idempotent() {
        let once = bind_last_words("Graphic design portfolio");
        assert_eq!(bind_last_words(&once), once);
    }
}
