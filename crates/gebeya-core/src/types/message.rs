use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scraped Telegram channel message.
///
/// Produced by the scrape tool, one row per retrieved message, appended
/// channel-major across channels. Fields missing from the source pass
/// through as `None` — there is no schema validation at this stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Channel handle the message was scraped from.
    pub channel: String,
    /// Telegram post id, unique per channel.
    pub message_id: i64,
    /// Post timestamp, if the source exposed one.
    pub date: Option<DateTime<Utc>>,
    /// View counter, if the source exposed one.
    pub views: Option<u64>,
    /// Message text; `None` for media-only posts.
    pub text: Option<String>,
    /// Whether the post carried a photo or video.
    pub has_media: bool,
}

/// A [`Message`] enriched by the preprocessing stage.
///
/// Derived deterministically from a raw row. Rows with empty text or a
/// normalized length of 5 characters or less are dropped before this type
/// is ever constructed, so `clean_text` is always non-empty and longer
/// than 5 characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub channel: String,
    pub message_id: i64,
    pub date: Option<DateTime<Utc>>,
    pub views: Option<u64>,
    pub text: String,
    pub has_media: bool,
    /// Normalized message text.
    pub clean_text: String,
    /// Candidate prices found in the raw text, in match order.
    #[serde(with = "float_list")]
    pub prices: Vec<f64>,
    pub price_count: usize,
    pub avg_price: Option<f64>,
    /// Product-keyword hits in the clean text, in encounter order.
    #[serde(with = "string_list")]
    pub product_terms: Vec<String>,
    pub product_count: usize,
    /// English weekday name of `date`.
    pub day_of_week: Option<String>,
    /// Hour-of-day of `date`.
    pub hour: Option<u32>,
    /// Character count of `clean_text`.
    pub text_length: usize,
}

/// Semicolon-joined list columns for the flat CSV snapshots.
///
/// The csv crate cannot serialize nested sequences, so list-valued
/// columns are stored as `a;b;c` strings.
mod string_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(list: &[String], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&list.join(";"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
        let joined = String::deserialize(de)?;
        if joined.is_empty() {
            return Ok(Vec::new());
        }
        Ok(joined.split(';').map(str::to_string).collect())
    }
}

mod float_list {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(list: &[f64], ser: S) -> Result<S::Ok, S::Error> {
        let joined = list
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(";");
        ser.serialize_str(&joined)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<f64>, D::Error> {
        let joined = String::deserialize(de)?;
        if joined.is_empty() {
            return Ok(Vec::new());
        }
        joined
            .split(';')
            .map(|p| p.parse::<f64>().map_err(D::Error::custom))
            .collect()
    }
}
