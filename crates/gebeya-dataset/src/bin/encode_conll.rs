//! Encode a CoNLL file into model-ready JSON lines.
//!
//! Each output line holds subword ids, attention mask and aligned label
//! ids for one sentence. The tokenizer is expected as
//! `<models>/tokenizer.json` (the serialized pretrained tokenizer).

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use gebeya_core::conll::read_conll_file;
use gebeya_core::{DataPaths, TrainingSettings};
use gebeya_dataset::LabelAligner;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let paths = DataPaths::default();
    let settings = TrainingSettings::default();

    let input = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "data/labeled/train.conll".to_string()),
    );

    let tokenizer_path = paths.models.join("tokenizer.json");
    let aligner = LabelAligner::from_file(&tokenizer_path, settings.max_length)
        .with_context(|| format!("failed to load tokenizer from {}", tokenizer_path.display()))?;

    let sentences = read_conll_file(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let output = input.with_extension("jsonl");
    let mut out = File::create(&output)?;

    let mut count = 0usize;
    for sentence in &sentences {
        let encoded = aligner.encode_sentence(sentence)?;
        writeln!(out, "{}", serde_json::to_string(&encoded)?)?;
        count += 1;
    }

    println!("Encoded {count} sentences to {}", output.display());
    Ok(())
}
