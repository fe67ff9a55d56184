//! UI utility functions
//!
//! Contains helper functions used across components

use crate::events::Worker;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Poller => Color::Cyan,
        Worker::Control => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Format an uptime duration the way the header displays it
pub fn format_uptime(uptime: std::time::Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!("{}d {}h {}m", secs / 86400, (secs % 86400) / 3600, (secs % 3600) / 60)
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Clean transport error messages down to something readable in the log
pub fn clean_transport_error_message(msg: &str) -> String {
    if msg.contains("transport error") && msg.contains("timed out") {
        return "Daemon timed out - next poll will retry".to_string();
    }
    if msg.contains("transport error") {
        return "Daemon unreachable - next poll will retry".to_string();
    }
    // Return original message if no transport error pattern detected
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2018-05-12 20:15:33"),
            "05-12 20:15"
        );
    }

    #[test]
    fn test_compact_timestamp_falls_back_on_garbage() {
        assert_eq!(format_compact_timestamp("later"), "later");
    }

    #[test]
    fn test_format_uptime_picks_largest_unit() {
        use std::time::Duration;
        assert_eq!(format_uptime(Duration::from_secs(95)), "1m 35s");
        assert_eq!(format_uptime(Duration::from_secs(3_700)), "1h 1m 40s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 1h 1m");
    }

    #[test]
    fn test_transport_errors_are_cleaned() {
        assert_eq!(
            clean_transport_error_message("transport error: operation timed out"),
            "Daemon timed out - next poll will retry"
        );
        assert_eq!(
            clean_transport_error_message("transport error: connection refused"),
            "Daemon unreachable - next poll will retry"
        );
        assert_eq!(
            clean_transport_error_message("record abc not present in snapshot"),
            "record abc not present in snapshot"
        );
    }
}
