use chrono::{DateTime, Utc};

/// Compact elapsed-time label such as `42s` or `3m 05s`.
#[must_use]
pub fn format_elapsed(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> String {
    let secs = (completed_at - started_at).num_seconds().max(0);
    let minutes = secs / 60;
    let seconds = secs % 60;
    if minutes == 0 {
        format!("{seconds}s")
    } else {
        format!("{minutes}m {seconds:02}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::time::fixed_now;

    #[test]
    fn formats_seconds_and_minutes() {
        let start = fixed_now();
        assert_eq!(format_elapsed(start, start + Duration::seconds(42)), "42s");
        assert_eq!(format_elapsed(start, start + Duration::seconds(185)), "3m 05s");
    }

    #[test]
    fn negative_ranges_clamp_to_zero() {
        let start = fixed_now();
        assert_eq!(format_elapsed(start, start - Duration::seconds(5)), "0s");
    }
}
