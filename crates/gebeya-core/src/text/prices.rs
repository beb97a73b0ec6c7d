//! # Price Candidate Extraction
//!
//! Finds birr amounts in raw (uncleaned) message text using the two patterns
//! e-commerce channels actually post: a currency word before the number
//! (`ዋጋ 1200`, `price: 1,200`) or after it (`500 ብር`, `500 birr`).

use regex::Regex;

use crate::error::Result;

/// Extracts numeric price candidates from message text.
pub struct PriceExtractor {
    re_prefixed: Regex,
    re_suffixed: Regex,
}

impl PriceExtractor {
    /// Constructs a new `PriceExtractor` with pre-compiled patterns.
    ///
    /// The amount is captured by an explicit named group so both patterns
    /// are unambiguous about which side of the match holds the digits.
    ///
    /// # Errors
    ///
    /// Returns `GebeyaError::Regex` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_prefixed: Regex::new(
                r"(?i)(?:ዋጋ|በ|ብር|br|birr|price)[:\s]*(?P<amount>[\d,]+\.?\d*)",
            )?,
            re_suffixed: Regex::new(r"(?i)(?P<amount>[\d,]+\.?\d*)\s*(?:ብር|br|birr)")?,
        })
    }

    /// Extract all price candidates, prefixed matches first.
    ///
    /// Thousands separators are stripped before parsing; matches that still
    /// fail to parse as a number are silently discarded.
    ///
    /// # Examples
    /// ```
    /// use gebeya_core::text::PriceExtractor;
    ///
    /// let extractor = PriceExtractor::new().unwrap();
    /// assert_eq!(extractor.extract("ዋጋ 1,200 ነው"), vec![1200.0]);
    /// assert_eq!(extractor.extract("500 birr"), vec![500.0]);
    /// ```
    pub fn extract(&self, text: &str) -> Vec<f64> {
        let mut prices = Vec::new();
        for re in [&self.re_prefixed, &self.re_suffixed] {
            for caps in re.captures_iter(text) {
                let amount = caps["amount"].replace(',', "");
                if let Ok(value) = amount.parse::<f64>() {
                    prices.push(value);
                }
            }
        }
        prices
    }
}
