//! Preprocessing pipeline: raw scrape snapshots → cleaned, enriched records.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::Deserialize;
use tracing::info;

use gebeya_core::config::DataPaths;
use gebeya_core::error::{GebeyaError, Result};
use gebeya_core::text::{PriceExtractor, ProductDetector, TextCleaner};
use gebeya_core::types::ProcessedRecord;

/// One row of a raw scrape snapshot, loaded permissively.
///
/// Every field except the channel/id pair may be absent; older snapshots
/// name the media flag `media` instead of `has_media`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub message_id: i64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "media")]
    pub has_media: Option<bool>,
}

/// Parse a snapshot timestamp, coercing anything malformed to `None`.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f %z", "%Y-%m-%d %H:%M:%S %z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.and_utc());
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Runs the cleaning/enrichment pass over a raw CSV snapshot.
pub struct Preprocessor {
    cleaner: TextCleaner,
    prices: PriceExtractor,
    products: ProductDetector,
    paths: DataPaths,
}

impl Preprocessor {
    /// Constructs a new `Preprocessor` writing under the given layout.
    pub fn new(paths: DataPaths) -> Result<Self> {
        Ok(Self {
            cleaner: TextCleaner::new()?,
            prices: PriceExtractor::new()?,
            products: ProductDetector::new()?,
            paths,
        })
    }

    /// Load a raw snapshot and run the full pipeline over it.
    ///
    /// Rows without text, and rows whose cleaned text is 5 characters or
    /// shorter, are dropped; the output row count is therefore at most the
    /// input row count.
    pub fn preprocess_file(&self, raw_csv: impl AsRef<Path>) -> Result<Vec<ProcessedRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(raw_csv.as_ref())
            .map_err(|e| GebeyaError::Csv(e.to_string()))?;

        let mut records = Vec::new();
        let mut dropped = 0usize;
        for row in reader.deserialize::<RawRecord>() {
            let row = row.map_err(|e| GebeyaError::Csv(e.to_string()))?;
            match self.process_row(row) {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        info!(kept = records.len(), dropped, "preprocessed raw snapshot");
        Ok(records)
    }

    /// Clean and enrich one row; `None` when the row is filtered out.
    fn process_row(&self, row: RawRecord) -> Option<ProcessedRecord> {
        let text = row.text?;

        let clean_text = self.cleaner.clean(&text);
        let text_length = clean_text.chars().count();
        if text_length <= 5 {
            return None;
        }

        // Prices come from the raw text: cleaning may eat currency symbols.
        let prices = self.prices.extract(&text);
        let avg_price =
            (!prices.is_empty()).then(|| prices.iter().sum::<f64>() / prices.len() as f64);

        let product_terms = self.products.detect(&clean_text);

        let date = row.date.as_deref().and_then(parse_date);
        let day_of_week = date.map(|d| d.format("%A").to_string());
        let hour = date.map(|d| d.hour());

        Some(ProcessedRecord {
            channel: row.channel,
            message_id: row.message_id,
            date,
            views: row.views,
            text,
            has_media: row.has_media.unwrap_or(false),
            clean_text,
            price_count: prices.len(),
            avg_price,
            prices,
            product_count: product_terms.len(),
            product_terms,
            day_of_week,
            hour,
            text_length,
        })
    }

    /// Persist processed rows to a timestamped CSV, creating the
    /// processed-data directory first.
    pub fn save(&self, records: &[ProcessedRecord]) -> Result<PathBuf> {
        fs::create_dir_all(&self.paths.processed_data)?;

        let filename = format!("processed_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));
        let path = self.paths.processed_data.join(filename);

        let mut writer =
            csv::Writer::from_path(&path).map_err(|e| GebeyaError::Csv(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| GebeyaError::Csv(e.to_string()))?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = records.len(), "wrote processed snapshot");
        Ok(path)
    }
}
