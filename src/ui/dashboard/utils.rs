//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Operation;
use ratatui::layout::Rect;
use ratatui::prelude::Color;

/// Get a ratatui color for the operation an event reports on
pub fn get_operation_color(operation: &Operation) -> Color {
    match operation {
        Operation::Load => Color::Cyan,
        Operation::Create => Color::Green,
        Operation::Update => Color::Yellow,
        Operation::Delete => Color::LightRed,
        Operation::Availability => Color::Magenta,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Request timed out - is the API running?".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("error sending request") {
        return "API unreachable - is the server running?".to_string();
    }
    // HTML error pages are noise in a one-line log
    if let Some(pos) = msg.find("<!DOCTYPE").or_else(|| msg.find("<html")) {
        return msg[..pos].trim_end().trim_end_matches(':').to_string();
    }
    msg.to_string()
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + area.width.saturating_sub(width) / 2;
    let popup_y = area.y + area.height.saturating_sub(height) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-03-05 14:07:59"), "03-05 14:07");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message_strips_html() {
        let msg = "Saving the dish failed: HTTP error with status 502: <!DOCTYPE html><html>...";
        assert_eq!(
            clean_http_error_message(msg),
            "Saving the dish failed: HTTP error with status 502"
        );
        assert_eq!(clean_http_error_message("Added Pasta (#2)"), "Added Pasta (#2)");
    }

    #[test]
    fn test_centered_popup_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 60, 20);
        assert_eq!(popup, Rect::new(20, 10, 60, 20));

        let small = centered_popup(Rect::new(0, 0, 30, 10), 60, 20);
        assert_eq!(small.width, 30);
        assert_eq!(small.height, 10);
    }
}
