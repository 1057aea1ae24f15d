//! Date display helpers for the terminal UI

use chrono::{DateTime, Utc};

/// Full date, "Jan 25, 2011" style
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Compact relative time, "3 days ago" style
///
/// Buckets mirror what people expect from web UIs: years, then months
/// (30-day approximation), days, hours, minutes, and finally "just now".
pub fn format_relative(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - date;
    let days = elapsed.num_days();
    let years = days / 365;
    let months = days / 30;
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();

    if years > 0 {
        plural(years, "year")
    } else if months > 0 {
        plural(months, "month")
    } else if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        "just now".to_string()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn full_date_format() {
        let date = Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap();
        assert_eq!(format_date(date), "Jan 25, 2011");
    }

    #[test]
    fn relative_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        assert_eq!(format_relative(now - Duration::days(800), now), "2 years ago");
        assert_eq!(format_relative(now - Duration::days(90), now), "3 months ago");
        assert_eq!(format_relative(now - Duration::days(1), now), "1 day ago");
        assert_eq!(format_relative(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(format_relative(now - Duration::minutes(2), now), "2 minutes ago");
        assert_eq!(format_relative(now - Duration::seconds(10), now), "just now");
    }
}
