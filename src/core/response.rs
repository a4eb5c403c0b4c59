//! Discord length limits and UTF-8 safe truncation
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add field and title limits, single truncation helper
//! - 1.0.0: Initial implementation

/// Discord embed description limit
pub const EMBED_LIMIT: usize = 4096;
/// Discord embed field value limit
pub const FIELD_LIMIT: usize = 1024;
/// Discord embed title limit
pub const TITLE_LIMIT: usize = 256;
/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Truncate to at most `max_bytes`, ending with "..." when cut
pub fn truncate(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }

    // Find a safe UTF-8 boundary, leaving room for "..."
    let mut end = max_bytes.saturating_sub(3);
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

pub fn truncate_for_embed(text: &str) -> String {
    truncate(text, EMBED_LIMIT)
}

pub fn truncate_for_field(text: &str) -> String {
    truncate(text, FIELD_LIMIT)
}

pub fn truncate_for_title(text: &str) -> String {
    truncate(text, TITLE_LIMIT)
}

pub fn truncate_for_message(text: &str) -> String {
    truncate(text, MESSAGE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_for_field("short text"), "short text");
    }

    #[test]
    fn test_exactly_at_limit() {
        let text = "a".repeat(FIELD_LIMIT);
        assert_eq!(truncate_for_field(&text), text);
    }

    #[test]
    fn test_long_text_truncated() {
        let result = truncate_for_embed(&"a".repeat(5000));
        assert!(result.len() <= EMBED_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_utf8_safety() {
        let text = "Jadwal 🌙 ".repeat(300);
        let result = truncate_for_field(&text);
        assert!(result.len() <= FIELD_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_title_and_message_limits() {
        assert!(truncate_for_title(&"x".repeat(300)).len() <= TITLE_LIMIT);
        assert!(truncate_for_message(&"x".repeat(3000)).len() <= MESSAGE_LIMIT);
    }
}
