pub mod message;
pub mod sentence;

pub use message::{Message, ProcessedRecord};
pub use sentence::LabeledSentence;
