use thiserror::Error;

/// Errors that can occur during Gebeya core operations.
#[derive(Debug, Error)]
pub enum GebeyaError {
    /// Reading or writing a dataset file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// A labeled sentence has diverging token and tag counts.
    #[error("token/tag length mismatch: {tokens} tokens vs {tags} tags")]
    LabelMismatch {
        /// Number of tokens in the sentence.
        tokens: usize,
        /// Number of tags in the sentence.
        tags: usize,
    },

    /// The subword tokenizer failed to load or encode.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// A CSV snapshot could not be read or written.
    #[error("csv error: {0}")]
    Csv(String),
}

/// Result type alias for Gebeya operations.
pub type Result<T> = std::result::Result<T, GebeyaError>;
