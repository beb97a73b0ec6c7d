use serde::{Deserialize, Serialize};

use crate::error::{GebeyaError, Result};

/// A manually labeled sentence: parallel token and tag sequences.
///
/// Tags are kept as strings so the type can carry whatever the annotation
/// round produced; mapping to [`crate::labels::NerTag`] ids happens at
/// encoding time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSentence {
    pub tokens: Vec<String>,
    pub tags: Vec<String>,
}

impl LabeledSentence {
    /// Build a sentence, enforcing the `tokens.len() == tags.len()` invariant.
    pub fn new(tokens: Vec<String>, tags: Vec<String>) -> Result<Self> {
        if tokens.len() != tags.len() {
            return Err(GebeyaError::LabelMismatch {
                tokens: tokens.len(),
                tags: tags.len(),
            });
        }
        Ok(Self { tokens, tags })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enforces_parallel_lengths() {
        let ok = LabeledSentence::new(
            vec!["ስልክ".to_string(), "1200".to_string()],
            vec!["B-PRODUCT".to_string(), "B-PRICE".to_string()],
        );
        assert!(ok.is_ok());

        let err = LabeledSentence::new(vec!["ስልክ".to_string()], vec![]);
        assert!(matches!(
            err,
            Err(GebeyaError::LabelMismatch { tokens: 1, tags: 0 })
        ));
    }

    #[test]
    fn test_len() {
        let s = LabeledSentence::new(
            vec!["buy".to_string()],
            vec!["O".to_string()],
        )
        .unwrap();
        assert_eq!(s.len(), 1);
        assert!(!s.is_empty());
    }
}
