//! # Amharic Text Normalization
//!
//! Collapses visually/phonetically equivalent Amharic glyph variants to one
//! canonical form and strips everything outside the working character set.

use regex::Regex;

use crate::error::Result;

/// Folds Amharic homoglyph variants onto their canonical character.
///
/// The ha-family (ሃ ሐ ሓ ኀ ኃ ኅ ኻ ኽ) collapses to ሀ; ሠ is folded to ሰ and
/// ዐ to አ. Everything else passes through unchanged.
fn fold_homoglyph(c: char) -> char {
    match c {
        'ሃ' | 'ሐ' | 'ሓ' | 'ኀ' | 'ኃ' | 'ኅ' | 'ኻ' | 'ኽ' => 'ሀ',
        'ሠ' => 'ሰ',
        'ዐ' => 'አ',
        _ => c,
    }
}

/// Normalizer for scraped message text.
pub struct TextCleaner {
    re_strip: Regex,
    re_whitespace: Regex,
}

impl TextCleaner {
    /// Constructs a new `TextCleaner` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `GebeyaError::Regex` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Everything outside word chars, the Ethiopic block, whitespace
            // and basic punctuation becomes a space.
            re_strip: Regex::new(r"[^\w\s\x{1200}-\x{137F}.,!?]")?,
            re_whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Clean and normalize a message text.
    ///
    /// # Examples
    /// ```
    /// use gebeya_core::text::TextCleaner;
    ///
    /// let cleaner = TextCleaner::new().unwrap();
    /// assert_eq!(cleaner.clean("ስልክ  በ500   ብር!💥"), "ስልክ በ500 ብር!");
    /// ```
    pub fn clean(&self, text: &str) -> String {
        let folded: String = text.chars().map(fold_homoglyph).collect();
        let stripped = self.re_strip.replace_all(&folded, " ");
        self.re_whitespace
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_homoglyph_folding() {
        let cleaner = TextCleaner::new().unwrap();
        assert_eq!(cleaner.clean("ሓረግ"), "ሀረግ");
        assert_eq!(cleaner.clean("ሠራተኛ"), "ሰራተኛ");
        assert_eq!(cleaner.clean("ዐይን"), "አይን");
    }

    #[test]
    fn test_strips_emoji_and_symbols() {
        let cleaner = TextCleaner::new().unwrap();
        let out = cleaner.clean("🔥 ስልክ ዋጋ፦ 500 ብር 🔥");
        for c in out.chars() {
            let ok = c.is_alphanumeric()
                || c == '_'
                || c == ' '
                || ('\u{1200}'..='\u{137F}').contains(&c)
                || matches!(c, '.' | ',' | '!' | '?');
            assert!(ok, "unexpected char {c:?} in {out:?}");
        }
    }

    #[test]
    fn test_collapses_whitespace() {
        let cleaner = TextCleaner::new().unwrap();
        let out = cleaner.clean("  phone \t\n  500   birr  ");
        assert_eq!(out, "phone 500 birr");
        assert!(!out.contains("  "));
    }

    #[test]
    fn test_keeps_basic_punctuation() {
        let cleaner = TextCleaner::new().unwrap();
        assert_eq!(cleaner.clean("አዲስ ስልክ ነው!?"), "አዲስ ስልክ ነው!?");
    }

    #[test]
    fn test_empty_input() {
        let cleaner = TextCleaner::new().unwrap();
        assert_eq!(cleaner.clean(""), "");
        assert_eq!(cleaner.clean("   "), "");
    }
}
