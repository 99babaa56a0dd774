//! Helper functions for the UI

use arboard::Clipboard;

/// Copy text to clipboard
pub fn copy_to_clipboard(text: &str) -> bool {
    if let Ok(mut clipboard) = Clipboard::new() {
        clipboard.set_text(text).is_ok()
    } else {
        false
    }
}

/// Format a session duration in seconds as HH:MM:SS
pub fn format_session(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::format_session;

    #[test]
    fn formats_session_durations() {
        assert_eq!(format_session(0), "00:00:00");
        assert_eq!(format_session(61), "00:01:01");
        assert_eq!(format_session(3600 * 3 + 62), "03:01:02");
    }
}
