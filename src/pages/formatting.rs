//! Text formatting helpers shared by the page builders.

use crate::error::AppError;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Placeholder for values that are missing or zero.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Formats a 0-1 fraction as a percentage with one decimal.
/// Zero, negative and non-finite fractions render as `N/A`.
pub fn percent_or_na(fraction: f64) -> String {
    if fraction.is_finite() && fraction > 0.0 {
        format!("{:.1}%", fraction * 100.0)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

pub fn optional_percent(fraction: Option<f64>) -> String {
    fraction.map_or_else(|| NOT_AVAILABLE.to_string(), percent_or_na)
}

/// Empty strings become `N/A`.
pub fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

/// "Wednesday, October 22, 2025"
pub fn format_long_date(date: &DateTime<Utc>, offset: &FixedOffset) -> String {
    date.with_timezone(offset)
        .format("%A, %B %-d, %Y")
        .to_string()
}

/// "October 19, 2025"
pub fn format_article_date(date: &DateTime<Utc>, offset: &FixedOffset) -> String {
    date.with_timezone(offset).format("%B %-d, %Y").to_string()
}

/// "October 22"
pub fn format_month_day(date: &DateTime<Utc>, offset: &FixedOffset) -> String {
    date.with_timezone(offset).format("%B %-d").to_string()
}

/// "Oct 22"
pub fn format_short_date(date: &DateTime<Utc>, offset: &FixedOffset) -> String {
    date.with_timezone(offset).format("%b %-d").to_string()
}

/// "4:00 PM"
pub fn format_time(date: &DateTime<Utc>, offset: &FixedOffset) -> String {
    date.with_timezone(offset).format("%-I:%M %p").to_string()
}

/// Local calendar day of a UTC timestamp.
pub fn local_day(date: &DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    date.with_timezone(offset).date_naive()
}

/// Parses a `YYYY-MM-DD` date given on the command line.
pub fn parse_date_filter(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid date '{input}', expected YYYY-MM-DD: {e}"))
    })
}

/// Cuts `text` to at most `width` characters, marking the cut with '…'.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn flush_paragraph(current: &mut String, paragraphs: &mut Vec<String>) {
    let text = decode_entities(current)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if !text.is_empty() {
        paragraphs.push(text);
    }
    current.clear();
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Turns an article HTML fragment into plain paragraphs.
///
/// Block-level closing tags (`</p>`, `</h1>`..`</h6>`, `</li>`, `<br>`) end a
/// paragraph; inline tags are dropped and whitespace is collapsed.
pub fn html_to_paragraphs(html: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut chars = html.chars();

    while let Some(c) = chars.next() {
        if c != '<' {
            current.push(c);
            continue;
        }
        let mut tag = String::new();
        for t in chars.by_ref() {
            if t == '>' {
                break;
            }
            tag.push(t);
        }
        let name = tag
            .trim_start_matches('/')
            .split(|ch: char| ch.is_whitespace() || ch == '/')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        let ends_block = matches!(
            name.as_str(),
            "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "li" | "br" | "div"
        );
        if ends_block {
            flush_paragraph(&mut current, &mut paragraphs);
        }
    }
    flush_paragraph(&mut current, &mut paragraphs);
    paragraphs
}
