//! Timestamp helpers shared by the services and the storage layer.
//!
//! Stored timestamps are RFC 3339 text with microsecond precision and a `Z`
//! suffix. The fixed width keeps lexicographic order equal to chronological
//! order, so `ORDER BY timestamp` in SQL sorts correctly.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

/// Current time truncated to the precision that survives a storage round-trip.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage (`2026-10-16T09:30:00.123456Z`).
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse an RFC 3339 timestamp into UTC.
///
/// ISO-8601 timestamps without an offset (`2024-05-01T10:00:00.123456`) are
/// read as UTC.
pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(err) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_is_fixed_width_utc() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format(&dt), "2026-01-02T03:04:05.000000Z");
    }

    #[test]
    fn test_format_sorts_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let later = earlier + chrono::Duration::microseconds(1);
        assert!(format(&earlier) < format(&later));
    }

    #[test]
    fn test_parse_accepts_offsets() {
        let parsed = parse("2026-01-02T05:04:05+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
    }

    #[test]
    fn test_parse_reads_naive_as_utc() {
        let parsed = parse("2024-05-01T10:00:00.250000").unwrap();
        assert_eq!(format(&parsed), "2024-05-01T10:00:00.250000Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_err());
    }

    #[test]
    fn test_now_round_trips_through_storage_format() {
        let now = now();
        assert_eq!(parse(&format(&now)).unwrap(), now);
    }
}
