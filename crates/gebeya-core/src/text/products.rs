//! Product-keyword detection over cleaned message text.

use std::collections::HashSet;

use regex::Regex;

use crate::error::Result;

/// Bilingual Amharic/English commerce nouns that mark a product mention.
const PRODUCT_KEYWORDS: &[&str] = &[
    "ሸክላ",
    "ቴሌቪዥን",
    "tv",
    "phone",
    "ስልክ",
    "laptop",
    "ኮምፒዩተር",
    "shoe",
    "ሲሊኮን",
    "silicon",
];

/// Detects product-keyword hits in cleaned text.
pub struct ProductDetector {
    re_token: Regex,
    keywords: HashSet<&'static str>,
}

impl ProductDetector {
    /// Constructs a new `ProductDetector`.
    ///
    /// # Errors
    ///
    /// Returns `GebeyaError::Regex` if the token pattern fails to compile
    /// (should never happen with the static pattern defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_token: Regex::new(r"[\w\x{1200}-\x{137F}]+")?,
            keywords: PRODUCT_KEYWORDS.iter().copied().collect(),
        })
    }

    /// Return keyword hits in encounter order, keeping the original casing.
    ///
    /// # Examples
    /// ```
    /// use gebeya_core::text::ProductDetector;
    ///
    /// let detector = ProductDetector::new().unwrap();
    /// let terms = detector.detect("I want a phone and a laptop");
    /// assert_eq!(terms, vec!["phone", "laptop"]);
    /// ```
    pub fn detect(&self, text: &str) -> Vec<String> {
        self.re_token
            .find_iter(text)
            .filter(|m| self.keywords.contains(m.as_str().to_lowercase().as_str()))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english_terms_in_order() {
        let detector = ProductDetector::new().unwrap();
        let terms = detector.detect("I want a phone and a laptop");
        assert_eq!(terms, vec!["phone", "laptop"]);
    }

    #[test]
    fn test_detects_amharic_terms() {
        let detector = ProductDetector::new().unwrap();
        let terms = detector.detect("አዲስ ስልክ እና ቴሌቪዥን በመሸጥ ላይ");
        assert_eq!(terms, vec!["ስልክ", "ቴሌቪዥን"]);
    }

    #[test]
    fn test_case_insensitive_keeps_original() {
        let detector = ProductDetector::new().unwrap();
        let terms = detector.detect("New PHONE for sale");
        assert_eq!(terms, vec!["PHONE"]);
    }

    #[test]
    fn test_no_hits() {
        let detector = ProductDetector::new().unwrap();
        assert!(detector.detect("ቡና እና ሻይ").is_empty());
        assert!(detector.detect("").is_empty());
    }

    #[test]
    fn test_substring_is_not_a_hit() {
        let detector = ProductDetector::new().unwrap();
        // "phones" tokenizes as one word and is not in the keyword set.
        assert!(detector.detect("phones").is_empty());
    }
}
