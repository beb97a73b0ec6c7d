//! Extraction of message records from public `t.me/s/<channel>` preview pages.
//!
//! The preview markup carries one `div.tgme_widget_message` per post with
//! the post id in `data-post`, the text body, a `time[datetime]` stamp, an
//! abbreviated view counter and media wrappers. Fields missing from a post
//! stay `None` — the raw snapshot is schema-free by design.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use lol_html::{element, text, HtmlRewriter, Settings};

use gebeya_core::Message;

#[derive(Debug, Default)]
struct PendingMessage {
    message_id: Option<i64>,
    date: Option<DateTime<Utc>>,
    views_raw: String,
    text: String,
    has_media: bool,
}

/// Parse an abbreviated view counter like `456`, `1.2K` or `3M`.
fn parse_views(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let (digits, factor) = if let Some(d) = raw.strip_suffix(['K', 'k']) {
        (d, 1_000.0)
    } else if let Some(d) = raw.strip_suffix(['M', 'm']) {
        (d, 1_000_000.0)
    } else {
        (raw, 1.0)
    };
    let value: f64 = digits.trim().parse().ok()?;
    Some((value * factor).round() as u64)
}

/// Parse one preview page into messages, in document order (oldest first).
///
/// Blocks without a parsable post id are discarded; every other field is
/// optional and passes through as `None` when absent.
pub fn parse_preview_page(channel: &str, html: &str) -> Result<Vec<Message>> {
    let pending: Rc<RefCell<Vec<PendingMessage>>> = Rc::new(RefCell::new(Vec::new()));

    let on_message = Rc::clone(&pending);
    let on_text = Rc::clone(&pending);
    let on_break = Rc::clone(&pending);
    let on_time = Rc::clone(&pending);
    let on_views = Rc::clone(&pending);
    let on_photo = Rc::clone(&pending);
    let on_video = Rc::clone(&pending);

    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![
                element!("div.tgme_widget_message[data-post]", move |el| {
                    let message_id = el
                        .get_attribute("data-post")
                        .and_then(|post| post.rsplit('/').next().map(str::to_string))
                        .and_then(|id| id.parse::<i64>().ok());
                    on_message.borrow_mut().push(PendingMessage {
                        message_id,
                        ..Default::default()
                    });
                    Ok(())
                }),
                text!("div.tgme_widget_message_text", move |chunk| {
                    if let Some(current) = on_text.borrow_mut().last_mut() {
                        current.text.push_str(chunk.as_str());
                    }
                    Ok(())
                }),
                element!("div.tgme_widget_message_text br", move |_| {
                    if let Some(current) = on_break.borrow_mut().last_mut() {
                        current.text.push('\n');
                    }
                    Ok(())
                }),
                element!("time[datetime]", move |el| {
                    if let Some(current) = on_time.borrow_mut().last_mut() {
                        current.date = el
                            .get_attribute("datetime")
                            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
                            .map(|dt| dt.with_timezone(&Utc));
                    }
                    Ok(())
                }),
                text!("span.tgme_widget_message_views", move |chunk| {
                    if let Some(current) = on_views.borrow_mut().last_mut() {
                        current.views_raw.push_str(chunk.as_str());
                    }
                    Ok(())
                }),
                element!("a.tgme_widget_message_photo_wrap", move |_| {
                    if let Some(current) = on_photo.borrow_mut().last_mut() {
                        current.has_media = true;
                    }
                    Ok(())
                }),
                element!("a.tgme_widget_message_video_player", move |_| {
                    if let Some(current) = on_video.borrow_mut().last_mut() {
                        current.has_media = true;
                    }
                    Ok(())
                }),
            ],
            ..Settings::default()
        },
        |_: &[u8]| {},
    );

    rewriter.write(html.as_bytes())?;
    rewriter.end()?;

    let pending = Rc::try_unwrap(pending)
        .map_err(|_| anyhow::anyhow!("preview accumulator still borrowed"))?
        .into_inner();

    let messages = pending
        .into_iter()
        .filter_map(|p| {
            let message_id = p.message_id?;
            let text = p.text.trim().to_string();
            Some(Message {
                channel: channel.to_string(),
                message_id,
                date: p.date,
                views: parse_views(&p.views_raw),
                text: (!text.is_empty()).then_some(text),
                has_media: p.has_media,
            })
        })
        .collect();

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
<html><body>
<div class="tgme_widget_message" data-post="ZemenExpress/101">
  <div class="tgme_widget_message_text">ስልክ ዋጋ 1200 ብር<br/>ነፃ ዲሊቨሪ</div>
  <span class="tgme_widget_message_views">1.2K</span>
  <time class="time" datetime="2024-06-20T09:30:00+00:00">09:30</time>
</div>
<div class="tgme_widget_message" data-post="ZemenExpress/102">
  <a class="tgme_widget_message_photo_wrap" href="x"></a>
  <span class="tgme_widget_message_views">88</span>
  <time class="time" datetime="2024-06-20T10:00:00+00:00">10:00</time>
</div>
</body></html>
"#;

    #[test]
    fn test_parses_message_fields() {
        let messages = parse_preview_page("ZemenExpress", FIXTURE).unwrap();
        assert_eq!(messages.len(), 2);

        let first = &messages[0];
        assert_eq!(first.channel, "ZemenExpress");
        assert_eq!(first.message_id, 101);
        assert_eq!(first.text.as_deref(), Some("ስልክ ዋጋ 1200 ብር\nነፃ ዲሊቨሪ"));
        assert_eq!(first.views, Some(1200));
        assert!(!first.has_media);
        assert_eq!(
            first.date.map(|d| d.to_rfc3339()),
            Some("2024-06-20T09:30:00+00:00".to_string())
        );
    }

    #[test]
    fn test_media_only_post_has_no_text() {
        let messages = parse_preview_page("ZemenExpress", FIXTURE).unwrap();
        let second = &messages[1];
        assert_eq!(second.message_id, 102);
        assert_eq!(second.text, None);
        assert!(second.has_media);
        assert_eq!(second.views, Some(88));
    }

    #[test]
    fn test_block_without_post_id_is_discarded() {
        let html = r#"<div class="tgme_widget_message"><div class="tgme_widget_message_text">x</div></div>"#;
        let messages = parse_preview_page("c", html).unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_empty_page() {
        let messages = parse_preview_page("c", "<html></html>").unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_parse_views_suffixes() {
        assert_eq!(parse_views("456"), Some(456));
        assert_eq!(parse_views("1.2K"), Some(1200));
        assert_eq!(parse_views("3M"), Some(3_000_000));
        assert_eq!(parse_views(""), None);
        assert_eq!(parse_views("n/a"), None);
    }
}
