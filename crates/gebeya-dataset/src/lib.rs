//! # Gebeya Dataset
//!
//! The batch stages of the pipeline: CSV preprocessing of raw scrape
//! snapshots, and subword tokenization with word-to-subword label
//! alignment for the downstream transformer fine-tune.

pub mod align;
pub mod preprocess;

pub use align::{EncodedExample, LabelAligner, IGNORE_INDEX};
pub use preprocess::{Preprocessor, RawRecord};
