use crate::config::{STATUS_MESSAGE_CAPACITY, STATUS_MESSAGE_TIMEOUT};
use std::time::Instant;

/// Message shown on the bottom bar until it goes stale.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    text: String,
    set_at: Instant,
}

impl StatusMessage {
    pub fn new(text: &str, now: Instant) -> StatusMessage {
        StatusMessage {
            text: truncate(text, STATUS_MESSAGE_CAPACITY).to_string(),
            set_at: now,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.set_at) < STATUS_MESSAGE_TIMEOUT
    }
}

/// Longest prefix of `text` that fits in `max` bytes without splitting a char.
fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_message_expires_after_timeout() {
        let start = Instant::now();
        let message = StatusMessage::new("HELP: Ctrl-Q = quit", start);
        assert!(message.is_visible(start));
        assert!(message.is_visible(start + Duration::from_millis(4999)));
        assert!(!message.is_visible(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_empty_message_is_never_visible() {
        let now = Instant::now();
        assert!(!StatusMessage::new("", now).is_visible(now));
    }

    #[test]
    fn test_long_message_is_truncated_on_char_boundary() {
        let now = Instant::now();
        let long = "x".repeat(200);
        assert_eq!(StatusMessage::new(&long, now).text().len(), STATUS_MESSAGE_CAPACITY);

        let wide = format!("{}é", "y".repeat(STATUS_MESSAGE_CAPACITY - 1));
        let message = StatusMessage::new(&wide, now);
        assert_eq!(message.text(), "y".repeat(STATUS_MESSAGE_CAPACITY - 1));
    }
}
