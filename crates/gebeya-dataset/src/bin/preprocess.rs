//! Preprocess a raw scrape snapshot into a cleaned, enriched CSV.
//!
//! Takes the raw CSV path as the first argument; with no argument, picks
//! the newest `telegram_*.csv` under the raw-data directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use gebeya_core::DataPaths;
use gebeya_dataset::Preprocessor;

fn latest_snapshot(dir: &Path) -> Option<PathBuf> {
    let mut snapshots: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("telegram_") && name.ends_with(".csv"))
        })
        .collect();
    snapshots.sort();
    snapshots.pop()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let paths = DataPaths::default();
    let raw_csv = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => latest_snapshot(&paths.raw_data)
            .with_context(|| format!("no telegram_*.csv under {}", paths.raw_data.display()))?,
    };

    let preprocessor = Preprocessor::new(paths)?;
    let records = preprocessor
        .preprocess_file(&raw_csv)
        .with_context(|| format!("failed to preprocess {}", raw_csv.display()))?;
    let saved = preprocessor.save(&records)?;

    println!("Processed {} rows into {}", records.len(), saved.display());
    Ok(())
}
