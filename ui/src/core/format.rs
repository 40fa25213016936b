//! Formatting helpers for presenting decks and history entries.

use time::{macros::format_description, OffsetDateTime, UtcOffset};

/// Position indicator such as `3 / 12`. `index` is zero-based.
pub fn format_progress(index: usize, total: usize) -> String {
    if total == 0 {
        return "0 / 0".to_string();
    }
    format!("{} / {total}", index.min(total - 1) + 1)
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Timestamp label stored alongside history entries, e.g. `2025-03-08 14:05`.
pub fn format_history_date(at: OffsetDateTime) -> String {
    at.format(&format_description!(
        "[year]-[month]-[day] [hour]:[minute]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

/// Current wall-clock time, local offset when the platform exposes one.
pub fn local_now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset),
        Err(_) => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn progress_is_one_based() {
        assert_eq!(format_progress(0, 1), "1 / 1");
        assert_eq!(format_progress(4, 5), "5 / 5");
        assert_eq!(format_progress(0, 0), "0 / 0");
    }

    #[test]
    fn progress_clamps_stale_index() {
        assert_eq!(format_progress(9, 3), "3 / 3");
    }

    #[test]
    fn sizes_pick_a_unit() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn history_date_is_minute_precision() {
        let at = datetime!(2025-03-08 14:05:59 UTC);
        assert_eq!(format_history_date(at), "2025-03-08 14:05");
    }
}
