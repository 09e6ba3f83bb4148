use chrono::{DateTime, NaiveDateTime};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_30_MIN: i64 = Self::MS_IN_MIN * 30;

    /// Provider timestamps are exchange-local wall clock, e.g. "2023-01-04 10:00:00".
    pub const QUOTE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    pub const CLOCK_TIME_FORMAT: &str = "%H:%M";
}

/// Parse a provider timestamp into epoch milliseconds.
///
/// The stamps carry no zone; they are only compared with each other and
/// rendered back as clock time, so a fixed UTC interpretation is fine.
pub fn parse_quote_timestamp(stamp: &str) -> Option<i64> {
    NaiveDateTime::parse_from_str(stamp, TimeUtils::QUOTE_TIME_FORMAT)
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Format an epoch-seconds axis value back to HH:MM.
pub fn epoch_sec_to_clock(epoch_sec: i64) -> String {
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt.format(TimeUtils::CLOCK_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_stamp() {
        let ms = parse_quote_timestamp("2023-01-04 10:00:00").unwrap();
        let earlier = parse_quote_timestamp("2023-01-04 09:25:00").unwrap();
        assert_eq!(ms - earlier, 35 * TimeUtils::MS_IN_MIN);
    }

    #[test]
    fn rejects_garbage_stamp() {
        assert!(parse_quote_timestamp("not a time").is_none());
        assert!(parse_quote_timestamp("2023-01-04").is_none());
    }

    #[test]
    fn clock_format_round_trips() {
        let ms = parse_quote_timestamp("2023-01-04 10:07:00").unwrap();
        assert_eq!(epoch_sec_to_clock(ms / TimeUtils::MS_IN_S), "10:07");
    }
}
