//! Timestamps as stored by the document store.
//!
//! BSON date-times carry millisecond precision, so every `created_at` is
//! truncated to whole milliseconds before it leaves the domain. A record read
//! back from the store then compares equal to the one that was written.

use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// UTC timestamp used for `created_at`.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time, truncated to millisecond precision.
#[must_use]
pub fn now() -> Timestamp {
    to_millis(Utc::now())
}

/// Drop any sub-millisecond component of `ts`.
#[must_use]
pub fn to_millis(ts: Timestamp) -> Timestamp {
    // Truncation only fails for spans wider than the timestamp itself.
    ts.duration_trunc(TimeDelta::milliseconds(1)).unwrap_or(ts)
}

/// Rebuild a timestamp from milliseconds since the Unix epoch.
///
/// Returns `None` when `millis` is outside the range `chrono` can represent.
#[must_use]
pub fn from_unix_millis(millis: i64) -> Option<Timestamp> {
    DateTime::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_time_without_sub_millis() {
        let before = to_millis(Utc::now());
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
        assert_eq!(ts.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn should_survive_millisecond_roundtrip() {
        let ts = now();
        let back = from_unix_millis(ts.timestamp_millis()).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn should_truncate_nanoseconds() {
        let ts = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        assert_eq!(to_millis(ts).timestamp_subsec_nanos(), 123_000_000);
    }
}
