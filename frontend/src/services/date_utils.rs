use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone};
use shared::Event;

/// Date helpers shared by the sheets, cards, and chart. Wall-clock reads go
/// through js-sys; everything else is pure chrono so it stays testable off
/// the browser.
pub struct DateUtils;

impl DateUtils {
    /// Parse an RFC 3339 timestamp, tolerating a missing offset (assumed UTC).
    pub fn parse_flexible_rfc3339(date_str: &str) -> Result<DateTime<FixedOffset>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
            return Ok(dt);
        }

        NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S%.f"))
            .map(|naive| FixedOffset::east_opt(0).unwrap().from_utc_datetime(&naive))
            .map_err(|e| format!("Unparseable timestamp '{}': {}", date_str, e))
    }

    /// Format for a datetime-local input value
    pub fn format_datetime_local(dt: &NaiveDateTime) -> String {
        dt.format("%Y-%m-%dT%H:%M").to_string()
    }

    /// Parse a datetime-local input value
    pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
    }

    /// Clock-time display, e.g. "3:42 PM"
    pub fn format_clock_time(dt: &NaiveDateTime) -> String {
        dt.format("%-I:%M %p").to_string()
    }

    /// Duration display, e.g. "45m" or "2h 15m"
    pub fn format_duration_minutes(minutes: i64) -> String {
        if minutes < 60 {
            format!("{}m", minutes.max(0))
        } else {
            format!("{}h {}m", minutes / 60, minutes % 60)
        }
    }

    /// Current wall-clock time in the browser's local timezone
    pub fn now_fixed() -> DateTime<FixedOffset> {
        let now = js_sys::Date::new_0();
        let offset_minutes = -(now.get_timezone_offset() as i32);
        let offset = FixedOffset::east_opt(offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
        let utc = DateTime::from_timestamp_millis(now.get_time() as i64)
            .unwrap_or_else(|| DateTime::from_timestamp_millis(0).unwrap());
        utc.with_timezone(&offset)
    }

    /// Current wall-clock time as a timezone-less local timestamp, for form
    /// defaults and datetime-local bounds
    pub fn now_naive_local() -> NaiveDateTime {
        Self::now_fixed().naive_local()
    }

    /// Current wall-clock time in epoch milliseconds
    pub fn now_epoch_millis() -> u64 {
        js_sys::Date::new_0().get_time() as u64
    }

    /// RFC 3339 string for a local timestamp, carrying the browser's offset
    pub fn naive_local_to_rfc3339(naive: &NaiveDateTime) -> String {
        let offset_minutes = -(js_sys::Date::new_0().get_timezone_offset() as i32);
        let offset = FixedOffset::east_opt(offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
        match offset.from_local_datetime(naive).single() {
            Some(dt) => dt.to_rfc3339(),
            None => naive.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// RFC 3339 string (UTC) for an epoch-milliseconds timestamp, e.g. a
    /// file's last-modified time. None for timestamps chrono cannot hold.
    pub fn epoch_millis_to_rfc3339(millis: i64) -> Option<String> {
        DateTime::from_timestamp_millis(millis).map(|dt| dt.to_rfc3339())
    }

    /// Events whose `occurred_at` falls inside the inclusive window
    /// [now - days, now]. Events with unparseable timestamps are excluded.
    pub fn events_within_last_days(
        events: &[Event],
        now: DateTime<FixedOffset>,
        days: i64,
    ) -> Vec<Event> {
        let cutoff = now - Duration::days(days);
        events
            .iter()
            .filter(|event| {
                Self::parse_flexible_rfc3339(&event.occurred_at)
                    .map(|dt| dt >= cutoff && dt <= now)
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Events whose `occurred_at` falls on the same calendar day as `now`
    pub fn events_on_day(events: &[Event], now: DateTime<FixedOffset>) -> Vec<Event> {
        let day = now.date_naive();
        events
            .iter()
            .filter(|event| {
                Self::parse_flexible_rfc3339(&event.occurred_at)
                    .map(|dt| dt.with_timezone(&now.timezone()).date_naive() == day)
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{Event, EventCategory};

    fn event_at(occurred_at: &str) -> Event {
        Event {
            id: Event::generate_id(EventCategory::Potty, 0),
            puppy_id: "puppy::1".to_string(),
            category: EventCategory::Potty,
            occurred_at: occurred_at.to_string(),
            ended_at: None,
            location: None,
            note: None,
            attachment: None,
        }
    }

    #[test]
    fn test_parse_flexible_rfc3339() {
        assert!(DateUtils::parse_flexible_rfc3339("2026-08-06T09:30:00-05:00").is_ok());
        assert!(DateUtils::parse_flexible_rfc3339("2026-08-06T09:30:00.123Z").is_ok());
        // Missing offset falls back to UTC
        let dt = DateUtils::parse_flexible_rfc3339("2026-08-06T09:30:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert!(DateUtils::parse_flexible_rfc3339("yesterday-ish").is_err());
    }

    #[test]
    fn test_datetime_local_round_trip() {
        let dt = NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        let formatted = DateUtils::format_datetime_local(&dt);
        assert_eq!(formatted, "2026-08-06T14:05");
        assert_eq!(DateUtils::parse_datetime_local(&formatted), Some(dt));
        assert_eq!(DateUtils::parse_datetime_local("not a time"), None);
    }

    #[test]
    fn test_format_clock_time() {
        let dt = NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(15, 42, 0)
            .unwrap();
        assert_eq!(DateUtils::format_clock_time(&dt), "3:42 PM");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(DateUtils::format_duration_minutes(45), "45m");
        assert_eq!(DateUtils::format_duration_minutes(135), "2h 15m");
        assert_eq!(DateUtils::format_duration_minutes(60), "1h 0m");
        assert_eq!(DateUtils::format_duration_minutes(-5), "0m");
    }

    #[test]
    fn test_epoch_millis_to_rfc3339() {
        let formatted = DateUtils::epoch_millis_to_rfc3339(1722950400000).unwrap();
        assert!(formatted.starts_with("2024-08-06T"));
        assert!(DateUtils::epoch_millis_to_rfc3339(i64::MAX).is_none());
    }

    #[test]
    fn test_events_within_last_days_boundaries() {
        let now = DateUtils::parse_flexible_rfc3339("2026-08-06T12:00:00Z").unwrap();
        let events = vec![
            event_at("2026-08-06T11:59:00Z"), // inside
            event_at("2026-07-30T12:00:00Z"), // exactly 7 days ago, inclusive
            event_at("2026-07-30T11:59:59Z"), // just outside
            event_at("2026-08-06T12:00:01Z"), // in the future
            event_at("garbage"),              // unparseable
        ];

        let window = DateUtils::events_within_last_days(&events, now, 7);
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_events_on_day() {
        let now = DateUtils::parse_flexible_rfc3339("2026-08-06T22:00:00Z").unwrap();
        let events = vec![
            event_at("2026-08-06T00:00:00Z"),
            event_at("2026-08-05T23:59:00Z"),
        ];
        let today = DateUtils::events_on_day(&events, now);
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].occurred_at, "2026-08-06T00:00:00Z");
    }
}
