//! Codec for the `CreateTS` field.
//!
//! The feed sends timestamps as `yyyy-MM-dd HH:mm:ss` with no offset, so they are
//! kept as naive local times. Anything else is rejected rather than guessed.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

/// chrono format string for `yyyy-MM-dd HH:mm:ss`
pub const CREATE_TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Byte layout of `yyyy-MM-dd HH:mm:ss`: `d` is an ASCII digit, anything else is literal
const CREATE_TS_LAYOUT: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTsError {
    #[error("expected exactly yyyy-MM-dd HH:mm:ss")]
    Layout,
    #[error(transparent)]
    OutOfRange(#[from] chrono::ParseError),
    #[error("leap second is not a valid time")]
    LeapSecond,
}

/// Parse a `CreateTS` value, failing on any other layout.
///
/// chrono alone accepts unpadded fields, extra or missing whitespace, a leading sign
/// and second 60, so the layout is checked byte for byte first.
pub fn parse_create_ts(raw: &str) -> Result<NaiveDateTime, CreateTsError> {
    let bytes = raw.as_bytes();
    if bytes.len() != CREATE_TS_LAYOUT.len() {
        return Err(CreateTsError::Layout);
    }
    let layout_matches = bytes
        .iter()
        .zip(CREATE_TS_LAYOUT.iter())
        .all(|(b, expected)| match expected {
            b'd' => b.is_ascii_digit(),
            literal => b == literal,
        });
    if !layout_matches {
        return Err(CreateTsError::Layout);
    }

    let ts = NaiveDateTime::parse_from_str(raw, CREATE_TS_FORMAT)?;
    // chrono represents second 60 as 59 plus a full second of nanos
    if ts.nanosecond() != 0 {
        return Err(CreateTsError::LeapSecond);
    }
    Ok(ts)
}

pub fn format_create_ts(ts: &NaiveDateTime) -> String {
    ts.format(CREATE_TS_FORMAT).to_string()
}

pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_create_ts(ts))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_create_ts(&raw).map_err(|e| {
        serde::de::Error::custom(format!(
            "invalid CreateTS '{}' (expected yyyy-MM-dd HH:mm:ss): {}",
            raw, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_create_ts() {
        let ts = parse_create_ts("2019-05-16 19:31:39").unwrap();
        assert_eq!(ts.year(), 2019);
        assert_eq!(ts.month(), 5);
        assert_eq!(ts.day(), 16);
        assert_eq!(ts.hour(), 19);
        assert_eq!(ts.minute(), 31);
        assert_eq!(ts.second(), 39);
    }

    #[test]
    fn test_parse_create_ts_rejects_other_formats() {
        assert!(parse_create_ts("16 May 2019").is_err());
        assert!(parse_create_ts("2019-05-16").is_err());
        assert!(parse_create_ts("2019-05-16T19:31:39").is_err());
        assert!(parse_create_ts("2019-05-16 19:31:39+01:00").is_err());
        assert!(parse_create_ts("").is_err());
    }

    #[test]
    fn test_parse_create_ts_rejects_near_misses() {
        for raw in [
            "2019-5-16 19:31:39",
            "2019-05-16 9:31:39",
            "2019-05-1619:31:39",
            "2019-05-16  19:31:39",
            " 2019-05-16 19:31:39",
            "2019-05-16 19:31:39 ",
            "+2019-05-16 19:31:39",
            "2019/05/16 19:31:39",
            "２019-05-16 19:31:39",
        ] {
            assert_eq!(parse_create_ts(raw), Err(CreateTsError::Layout), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_parse_create_ts_rejects_out_of_range() {
        assert_eq!(parse_create_ts("2019-05-16 23:59:60"), Err(CreateTsError::LeapSecond));
        assert!(matches!(parse_create_ts("2019-13-01 00:00:00"), Err(CreateTsError::OutOfRange(_))));
        assert!(matches!(parse_create_ts("2019-02-30 00:00:00"), Err(CreateTsError::OutOfRange(_))));
        assert!(matches!(parse_create_ts("2019-05-16 24:00:00"), Err(CreateTsError::OutOfRange(_))));
    }

    #[test]
    fn test_format_create_ts() {
        let ts = parse_create_ts("2020-01-01 00:00:00").unwrap();
        assert_eq!(format_create_ts(&ts), "2020-01-01 00:00:00");
    }
}
