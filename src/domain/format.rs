//! Display formatting for counts and relative times.

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Formats a count with a `K`/`M` suffix.
///
/// - `>= 1_000_000`: one decimal and `M` (`2.3M`)
/// - `>= 1_000`: one decimal and `K` (`12.5K`)
/// - otherwise the plain number
///
/// The decimal rounds half up, so `1_250` is `1.3K`.
///
/// # Examples
///
/// ```
/// use neonfeed::domain::format_count;
///
/// assert_eq!(format_count(12_500), "12.5K");
/// assert_eq!(format_count(890), "890");
/// assert_eq!(format_count(2_300_000), "2.3M");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        scaled(n, 1_000_000, 'M')
    } else if n >= 1_000 {
        scaled(n, 1_000, 'K')
    } else {
        n.to_string()
    }
}

/// `n / unit` to one decimal, rounded half up in integer tenths.
fn scaled(n: u64, unit: u64, suffix: char) -> String {
    let step = unit / 10;
    let tenths = n.saturating_add(step / 2) / step;
    format!("{}.{}{suffix}", tenths / 10, tenths % 10)
}

/// Returns a short label describing how long before `now` the `timestamp` is.
///
/// - Less than 1 minute (or in the future): "just now"
/// - Less than 1 hour: "Xm ago"
/// - Less than 1 day: "Xh ago"
/// - Otherwise: "Xd ago"
#[must_use]
pub fn time_ago(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        format!("{}m ago", diff / SECONDS_PER_MINUTE)
    } else if diff < SECONDS_PER_DAY {
        format!("{}h ago", diff / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", diff / SECONDS_PER_DAY)
    }
}

/// Label for a dataset record aged `age_secs` before a session mounted at
/// `mounted_at`, as seen at the current wall-clock time.
#[must_use]
pub fn age_label(age_secs: i64, mounted_at: i64) -> String {
    time_ago(mounted_at - age_secs, chrono::Utc::now().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_below_a_thousand_are_plain() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(156), "156");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn thousands_and_millions_get_suffixes() {
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(12_500), "12.5K");
        assert_eq!(format_count(1_000_000), "1.0M");
        assert_eq!(format_count(2_300_000), "2.3M");
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(format_count(1_250), "1.3K");
        assert_eq!(format_count(12_250), "12.3K");
        assert_eq!(format_count(2_250_000), "2.3M");
        assert_eq!(format_count(1_249), "1.2K");
        assert_eq!(format_count(999_950), "1000.0K");
    }

    #[test]
    fn time_ago_buckets() {
        let now = 1_700_000_000;
        assert_eq!(time_ago(now - 30, now), "just now");
        assert_eq!(time_ago(now + 30, now), "just now");
        assert_eq!(time_ago(now - 120, now), "2m ago");
        assert_eq!(time_ago(now - 3 * 3600, now), "3h ago");
        assert_eq!(time_ago(now - 2 * 86400, now), "2d ago");
    }
}
