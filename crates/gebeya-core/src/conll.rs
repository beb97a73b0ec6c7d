//! # CoNLL Formatting
//!
//! Serializes labeled sentences to the 10-column CoNLL-U-like text format
//! consumed by the annotation tooling, and reads such files back into
//! [`LabeledSentence`]s. One token per line, blank line between sentences.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::labels::NerTag;
use crate::types::LabeledSentence;

/// Format one sentence as a CoNLL block: 1-based index, token, and the tag
/// in the fourth field, remaining columns `_` placeholders.
///
/// Pure formatting — tags are written verbatim, including tags outside the
/// configured label set.
pub fn format_sentence(sentence: &LabeledSentence) -> String {
    sentence
        .tokens
        .iter()
        .zip(&sentence.tags)
        .enumerate()
        .map(|(i, (token, tag))| format!("{}\t{token}\t_\t{tag}\t_\t_\t_\t_\t_\t_", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write sentences to a CoNLL file, blocks separated by one blank line.
///
/// Tags outside the configured label set are preserved verbatim but logged,
/// so a typo'd annotation round is visible without failing the export.
pub fn write_conll_file(sentences: &[LabeledSentence], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    for sentence in sentences {
        for tag in &sentence.tags {
            if NerTag::from_tag_str(tag).is_none() {
                warn!(%tag, "tag outside the configured label set");
            }
        }
        writer.write_all(format_sentence(sentence).as_bytes())?;
        writer.write_all(b"\n\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Read a CoNLL file back into labeled sentences.
///
/// Blank lines close the current sentence and `#` lines are skipped.
/// Tags are kept verbatim, consistent with the writer.
pub fn read_conll_file(path: impl AsRef<Path>) -> Result<Vec<LabeledSentence>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut sentences = Vec::new();
    let mut tokens = Vec::new();
    let mut tags = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            if !tokens.is_empty() {
                sentences.push(LabeledSentence::new(
                    std::mem::take(&mut tokens),
                    std::mem::take(&mut tags),
                )?);
            }
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() == 10 {
            tokens.push(fields[1].to_string());
            tags.push(fields[3].to_string());
        }
    }

    // Last sentence when the file does not end with a blank line.
    if !tokens.is_empty() {
        sentences.push(LabeledSentence::new(tokens, tags)?);
    }

    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(tokens: &[&str], tags: &[&str]) -> LabeledSentence {
        LabeledSentence::new(
            tokens.iter().map(|t| t.to_string()).collect(),
            tags.iter().map(|t| t.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_block_shape() {
        let s = sentence(&["ስልክ", "በ", "500", "ብር"], &["B-PRODUCT", "O", "B-PRICE", "I-PRICE"]);
        let block = format_sentence(&s);

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 4);
        for (i, line) in lines.iter().enumerate() {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 10);
            assert_eq!(fields[0], (i + 1).to_string());
            assert_eq!(fields[1], s.tokens[i]);
            assert_eq!(fields[3], s.tags[i]);
        }
    }

    #[test]
    fn test_unknown_tag_passes_through() {
        let s = sentence(&["Addis"], &["B-CITY"]);
        let block = format_sentence(&s);
        assert!(block.contains("\tB-CITY\t"));
    }

    #[test]
    fn test_empty_sentence_formats_to_empty_block() {
        let s = sentence(&[], &[]);
        assert_eq!(format_sentence(&s), "");
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labeled.conll");

        let sentences = vec![
            sentence(&["ስልክ", "500", "ብር"], &["B-PRODUCT", "B-PRICE", "I-PRICE"]),
            sentence(&["አዲስ", "አበባ"], &["B-LOC", "I-LOC"]),
        ];

        write_conll_file(&sentences, &path).unwrap();
        let back = read_conll_file(&path).unwrap();
        assert_eq!(back, sentences);
    }

    #[test]
    fn test_blocks_separated_by_single_blank_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labeled.conll");

        let sentences = vec![sentence(&["a"], &["O"]), sentence(&["b"], &["O"])];
        write_conll_file(&sentences, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1\ta\t_\tO\t_\t_\t_\t_\t_\t_\n\n1\tb\t_\tO\t_\t_\t_\t_\t_\t_\n\n");
    }

    #[test]
    fn test_read_skips_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labeled.conll");
        std::fs::write(
            &path,
            "# channel: ZemenExpress\n1\tphone\t_\tB-PRODUCT\t_\t_\t_\t_\t_\t_\n",
        )
        .unwrap();

        let back = read_conll_file(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].tokens, vec!["phone"]);
        assert_eq!(back[0].tags, vec!["B-PRODUCT"]);
    }
}
