//! CLI command handlers
//!
//! Each submodule handles one subcommand group, rendering results with
//! `prettytable` and `colored`. Handlers receive the services they need
//! rather than constructing their own store.

pub mod data;
pub mod notifications;
pub mod sessions;

use chrono::{DateTime, Utc};

/// Render epoch milliseconds as a short local-agnostic timestamp
pub(crate) fn format_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Shorten a title to at most `max_bytes` of UTF-8, appending `...`
///
/// Cuts on a character boundary so multibyte titles (Korean is the
/// app's default language) never split mid-character.
pub(crate) fn truncate_title(title: &str, max_bytes: usize) -> String {
    if title.len() <= max_bytes {
        return title.to_string();
    }

    let budget = max_bytes.saturating_sub(3);
    let cut = title
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= budget)
        .last()
        .unwrap_or(0);

    format!("{}...", &title[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis() {
        // 2021-01-01T00:00:00Z
        assert_eq!(format_millis(1_609_459_200_000), "2021-01-01 00:00");
    }

    #[test]
    fn test_format_millis_out_of_range_falls_back() {
        assert_eq!(format_millis(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_truncate_title_short_titles_untouched() {
        assert_eq!(truncate_title("Demo", 40), "Demo");
        assert_eq!(truncate_title("", 40), "");
    }

    #[test]
    fn test_truncate_title_long_ascii() {
        let title = "a".repeat(50);
        let truncated = truncate_title(&title, 40);
        assert_eq!(truncated, format!("{}...", "a".repeat(37)));
        assert_eq!(truncated.len(), 40);
    }

    #[test]
    fn test_truncate_title_multibyte_cuts_on_char_boundary() {
        // 15 Hangul syllables plus spaces is 48 bytes of UTF-8, past the 40-byte cap
        let title = "안녕하세요 저는 당신의 비서입니다".to_string();
        assert!(title.len() > 40);

        let truncated = truncate_title(&title, 40);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 40);
        // Still valid UTF-8 all the way through
        assert!(truncated.chars().count() > 0);
    }

    #[test]
    fn test_truncate_title_boundary_exactly_at_cap() {
        let title = "b".repeat(40);
        assert_eq!(truncate_title(&title, 40), title);
    }
}
