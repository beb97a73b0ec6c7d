//! Static configuration for the dataset pipeline.
//!
//! All values are fixed at process start; there is no runtime mutation.

use std::path::PathBuf;

/// Pretrained model/tokenizer identifiers.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    /// HuggingFace model identifier used downstream for fine-tuning.
    pub model_name: String,
    /// Tokenizer identifier; the serialized `tokenizer.json` of this model
    /// is expected under [`DataPaths::models`].
    pub tokenizer_name: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model_name: "xlm-roberta-base".to_string(),
            tokenizer_name: "xlm-roberta-base".to_string(),
        }
    }
}

/// Hyperparameters consumed by the external training code.
#[derive(Debug, Clone, Copy)]
pub struct TrainingSettings {
    pub batch_size: usize,
    pub learning_rate: f64,
    pub epochs: usize,
    /// Fixed subword sequence length: longer inputs are truncated,
    /// shorter ones padded.
    pub max_length: usize,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            batch_size: 8,
            learning_rate: 3e-5,
            epochs: 5,
            max_length: 128,
        }
    }
}

/// Filesystem layout for the pipeline stages.
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Raw scraped CSV snapshots.
    pub raw_data: PathBuf,
    /// Cleaned/enriched CSV snapshots.
    pub processed_data: PathBuf,
    /// CoNLL files produced from labeled sentences.
    pub labeled_data: PathBuf,
    /// Model artifacts (tokenizer.json, fine-tuned weights).
    pub models: PathBuf,
    /// Log output.
    pub logs: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            raw_data: PathBuf::from("data/raw"),
            processed_data: PathBuf::from("data/processed"),
            labeled_data: PathBuf::from("data/labeled"),
            models: PathBuf::from("models"),
            logs: PathBuf::from("logs"),
        }
    }
}

impl DataPaths {
    /// Layout rooted at `base` instead of the current directory.
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            raw_data: base.join("data/raw"),
            processed_data: base.join("data/processed"),
            labeled_data: base.join("data/labeled"),
            models: base.join("models"),
            logs: base.join("logs"),
        }
    }
}
