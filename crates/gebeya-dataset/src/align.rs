//! # Subword Tokenization and Label Alignment
//!
//! Wraps a pretrained HuggingFace tokenizer and re-maps per-word entity
//! tags onto subword positions: the first subword of a word keeps the
//! word's label, continuation subwords and padding get the ignore
//! sentinel. This is the one place a boundary bug would silently corrupt
//! training data, so the mapping is tested exhaustively.

use std::path::Path;

use serde::Serialize;
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};
use tracing::warn;

use gebeya_core::error::{GebeyaError, Result};
use gebeya_core::labels::NerTag;
use gebeya_core::types::LabeledSentence;

/// Loss-masking sentinel for positions that must not be trained on.
pub const IGNORE_INDEX: i64 = -100;

/// One model-ready example, all sequences of the configured fixed length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedExample {
    pub input_ids: Vec<u32>,
    pub attention_mask: Vec<u32>,
    pub labels: Vec<i64>,
}

/// Tokenizes pre-segmented sentences and aligns tag ids to subwords.
pub struct LabelAligner {
    tokenizer: Tokenizer,
    max_length: usize,
}

impl LabelAligner {
    /// Load a serialized tokenizer (`tokenizer.json`) from disk.
    pub fn from_file(path: impl AsRef<Path>, max_length: usize) -> Result<Self> {
        let tokenizer = Tokenizer::from_file(path.as_ref())
            .map_err(|e| GebeyaError::Tokenizer(e.to_string()))?;
        Self::from_tokenizer(tokenizer, max_length)
    }

    /// Wrap an already-built tokenizer, configuring fixed-length
    /// truncation and padding.
    pub fn from_tokenizer(mut tokenizer: Tokenizer, max_length: usize) -> Result<Self> {
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length,
                ..Default::default()
            }))
            .map_err(|e| GebeyaError::Tokenizer(e.to_string()))?;
        tokenizer.with_padding(Some(PaddingParams {
            strategy: PaddingStrategy::Fixed(max_length),
            ..Default::default()
        }));

        Ok(Self {
            tokenizer,
            max_length,
        })
    }

    /// The fixed sequence length of every encoded example.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Encode one pre-segmented sentence and align its tag ids.
    ///
    /// `tokens` and `ner_tags` must be parallel. In the output labels:
    /// - positions with no originating word (special tokens, padding) are
    ///   [`IGNORE_INDEX`],
    /// - the first subword of word *i* carries `ner_tags[i]`,
    /// - every further subword of the same word is [`IGNORE_INDEX`].
    pub fn encode(&self, tokens: &[String], ner_tags: &[i64]) -> Result<EncodedExample> {
        if tokens.len() != ner_tags.len() {
            return Err(GebeyaError::LabelMismatch {
                tokens: tokens.len(),
                tags: ner_tags.len(),
            });
        }

        let words: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let encoding = self
            .tokenizer
            .encode(words, true)
            .map_err(|e| GebeyaError::Tokenizer(e.to_string()))?;

        let mut labels = Vec::with_capacity(encoding.len());
        let mut previous_word: Option<u32> = None;
        for &word_id in encoding.get_word_ids() {
            let label = match word_id {
                Some(word) if previous_word != Some(word) => ner_tags[word as usize],
                _ => IGNORE_INDEX,
            };
            labels.push(label);
            previous_word = word_id;
        }

        Ok(EncodedExample {
            input_ids: encoding.get_ids().to_vec(),
            attention_mask: encoding.get_attention_mask().to_vec(),
            labels,
        })
    }

    /// Encode a labeled sentence, mapping tag strings to ids first.
    ///
    /// Tags outside the configured label set are logged and treated as the
    /// non-entity tag, consistent with the permissive CoNLL reader.
    pub fn encode_sentence(&self, sentence: &LabeledSentence) -> Result<EncodedExample> {
        let ids: Vec<i64> = sentence
            .tags
            .iter()
            .map(|tag| match NerTag::from_tag_str(tag) {
                Some(known) => known.index() as i64,
                None => {
                    warn!(%tag, "unknown tag treated as O");
                    NerTag::Outside.index() as i64
                }
            })
            .collect();
        self.encode(&sentence.tokens, &ids)
    }

    /// Encode a batch of labeled sentences.
    pub fn encode_batch(&self, sentences: &[LabeledSentence]) -> Result<Vec<EncodedExample>> {
        sentences.iter().map(|s| self.encode_sentence(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokenizers::models::wordpiece::WordPiece;

    const MAX_LEN: usize = 8;

    /// Tiny WordPiece tokenizer: "iPhone" splits into "iP" + "##hone",
    /// everything else in the vocab is a single subword.
    fn test_aligner() -> LabelAligner {
        let vocab: HashMap<String, u32> = [
            ("[PAD]", 0),
            ("[UNK]", 1),
            ("buy", 2),
            ("iP", 3),
            ("##hone", 4),
            ("500", 5),
            ("birr", 6),
        ]
        .into_iter()
        .map(|(token, id)| (token.to_string(), id))
        .collect();

        let model = WordPiece::builder()
            .vocab(vocab)
            .unk_token("[UNK]".to_string())
            .build()
            .unwrap();

        LabelAligner::from_tokenizer(Tokenizer::new(model), MAX_LEN).unwrap()
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_first_subword_keeps_label() {
        let aligner = test_aligner();
        let encoded = aligner
            .encode(&strings(&["buy", "iPhone"]), &[0, 1])
            .unwrap();

        assert_eq!(encoded.labels.len(), MAX_LEN);
        // "buy" → one subword, "iPhone" → two subwords, rest padding.
        assert_eq!(&encoded.labels[..3], &[0, 1, IGNORE_INDEX]);
        assert!(encoded.labels[3..].iter().all(|&l| l == IGNORE_INDEX));
        assert_eq!(encoded.labels.iter().filter(|&&l| l == 1).count(), 1);
    }

    #[test]
    fn test_fixed_length_output() {
        let aligner = test_aligner();
        let encoded = aligner.encode(&strings(&["buy"]), &[0]).unwrap();

        assert_eq!(encoded.input_ids.len(), MAX_LEN);
        assert_eq!(encoded.attention_mask.len(), MAX_LEN);
        assert_eq!(encoded.labels.len(), MAX_LEN);
        // Padding is masked out of both attention and loss.
        assert_eq!(encoded.attention_mask[1..], [0; MAX_LEN - 1]);
        assert!(encoded.labels[1..].iter().all(|&l| l == IGNORE_INDEX));
    }

    #[test]
    fn test_truncation_to_max_length() {
        let aligner = test_aligner();
        let words = strings(&["buy"; 20]);
        let tags = vec![0i64; 20];
        let encoded = aligner.encode(&words, &tags).unwrap();
        assert_eq!(encoded.input_ids.len(), MAX_LEN);
        assert_eq!(encoded.labels.len(), MAX_LEN);
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let aligner = test_aligner();
        let err = aligner.encode(&strings(&["buy", "iPhone"]), &[0]);
        assert!(matches!(
            err,
            Err(GebeyaError::LabelMismatch { tokens: 2, tags: 1 })
        ));
    }

    #[test]
    fn test_encode_sentence_maps_tag_strings() {
        let aligner = test_aligner();
        let sentence = LabeledSentence::new(
            strings(&["buy", "iPhone"]),
            strings(&["O", "B-PRODUCT"]),
        )
        .unwrap();

        let encoded = aligner.encode_sentence(&sentence).unwrap();
        assert_eq!(&encoded.labels[..2], &[0, NerTag::BeginProduct.index() as i64]);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_outside() {
        let aligner = test_aligner();
        let sentence =
            LabeledSentence::new(strings(&["buy"]), strings(&["B-GADGET"])).unwrap();

        let encoded = aligner.encode_sentence(&sentence).unwrap();
        assert_eq!(encoded.labels[0], 0);
    }

    #[test]
    fn test_tokenizer_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");

        let aligner = test_aligner();
        aligner.tokenizer.save(&path, false).unwrap();

        let reloaded = LabelAligner::from_file(&path, MAX_LEN).unwrap();
        let a = aligner.encode(&strings(&["buy", "iPhone"]), &[0, 1]).unwrap();
        let b = reloaded.encode(&strings(&["buy", "iPhone"]), &[0, 1]).unwrap();
        assert_eq!(a, b);
    }
}
