//! # Gebeya Core
//!
//! Building blocks for constructing an Amharic NER dataset from Telegram
//! e-commerce posts: text normalization, price/product heuristics, the
//! fixed BIO label set, and CoNLL serialization.
//!
//! ## Quick Start
//!
//! ```rust
//! use gebeya_core::text::{PriceExtractor, TextCleaner};
//!
//! let cleaner = TextCleaner::new().unwrap();
//! let prices = PriceExtractor::new().unwrap();
//!
//! assert_eq!(cleaner.clean("ስልክ   በ500 ብር 🔥"), "ስልክ በ500 ብር");
//! assert_eq!(prices.extract("ስልክ በ500 ብር"), vec![500.0, 500.0]);
//! ```
pub mod config;
pub mod conll;
pub mod error;
pub mod labels;
pub mod text;
pub mod types;

// Re-export primary API
pub use config::{DataPaths, ModelSettings, TrainingSettings};
pub use error::{GebeyaError, Result};
pub use labels::NerTag;
pub use text::{PriceExtractor, ProductDetector, TextCleaner};
pub use types::{LabeledSentence, Message, ProcessedRecord};
