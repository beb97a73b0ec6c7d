//! Telegram Channel Scrape Tool
//!
//! Collects recent posts from public e-commerce channels via the
//! `t.me/s/<channel>` preview pages and writes one raw CSV snapshot per
//! run. Channels are processed sequentially; a failing channel is logged
//! and skipped so partial results are always preserved.

mod preview;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use reqwest::Client;
use tracing::{info, warn};

use gebeya_core::{DataPaths, Message};
use preview::parse_preview_page;

/// Channels scraped when none are given on the command line.
const DEFAULT_CHANNELS: &[&str] = &["ZemenExpress", "nevacomputer", "meneshayeofficial"];

const PREVIEW_BASE: &str = "https://t.me/s";

/// CLI arguments
#[derive(Parser)]
#[command(name = "telegram-scrape")]
#[command(about = "Scrape public Telegram channel previews into a raw CSV snapshot")]
#[command(version)]
struct Cli {
    /// Channel handles to scrape (defaults to the e-commerce set)
    channels: Vec<String>,

    /// Most-recent messages to keep per channel
    #[arg(short, long, env = "GEBEYA_SCRAPE_LIMIT", default_value_t = 100)]
    limit: usize,

    /// Output directory for the raw CSV snapshot
    #[arg(short, long, env = "GEBEYA_RAW_DIR")]
    out_dir: Option<PathBuf>,
}

/// Fetch up to `limit` most recent messages of one channel, newest first.
///
/// Pages backwards through the preview with `?before=<oldest id>` until the
/// limit is reached or the channel start is hit.
async fn scrape_channel(client: &Client, channel: &str, limit: usize) -> Result<Vec<Message>> {
    let mut collected: Vec<Message> = Vec::new();
    let mut cursor: Option<i64> = None;

    loop {
        let url = match cursor {
            Some(before) => format!("{PREVIEW_BASE}/{channel}?before={before}"),
            None => format!("{PREVIEW_BASE}/{channel}"),
        };

        let html = client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?
            .text()
            .await
            .context("failed to read preview body")?;

        let page = parse_preview_page(channel, &html)?;
        if page.is_empty() {
            break;
        }

        let oldest = page.iter().map(|m| m.message_id).min();
        collected.extend(page);
        if collected.len() >= limit {
            break;
        }

        match oldest {
            // Stop at the channel start or when the cursor no longer moves.
            Some(id) if Some(id) != cursor && id > 1 => cursor = Some(id),
            _ => break,
        }
    }

    // Newest first, like the message-history iterators of the client APIs.
    collected.sort_by(|a, b| b.message_id.cmp(&a.message_id));
    collected.dedup_by_key(|m| m.message_id);
    collected.truncate(limit);
    Ok(collected)
}

/// Write the aggregated messages to a timestamped CSV under `out_dir`.
fn save_snapshot(messages: &[Message], out_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let filename = format!("telegram_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));
    let path = out_dir.join(filename);

    let mut writer = csv::Writer::from_path(&path)?;
    for message in messages {
        writer.serialize(message)?;
    }
    writer.flush()?;
    Ok(path)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let channels: Vec<String> = if cli.channels.is_empty() {
        DEFAULT_CHANNELS.iter().map(|c| c.to_string()).collect()
    } else {
        cli.channels
    };
    let out_dir = cli.out_dir.unwrap_or_else(|| DataPaths::default().raw_data);

    let client = Client::builder()
        .user_agent(concat!("gebeya-scrape/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let mut all_messages: Vec<Message> = Vec::new();
    for channel in &channels {
        info!(%channel, limit = cli.limit, "scraping channel preview");
        match scrape_channel(&client, channel, cli.limit).await {
            Ok(messages) => {
                info!(%channel, count = messages.len(), "channel scraped");
                all_messages.extend(messages);
            }
            Err(err) => {
                warn!(%channel, error = %err, "channel failed, continuing with the next one");
            }
        }
    }

    let path = save_snapshot(&all_messages, &out_dir)?;
    println!("Data successfully saved to: {}", path.display());
    Ok(())
}
