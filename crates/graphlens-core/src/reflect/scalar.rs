//! Normalized terminal values.

use std::fmt;

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta, Utc,
};
use serde_json::Value;
use uuid::Uuid;

/// A terminal value with its nullable wrapper already removed.
///
/// Every integer width maps onto `Int` (or `UInt` for `u128`), every float
/// onto `Float`, and zoned timestamps onto `Instant` in UTC, so equality is
/// exact value equality independent of the declared width.
#[derive(Debug, Clone, Copy)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i128),
    UInt(u128),
    Float(f64),
    Char(char),
    Text(&'a str),
    Uuid(Uuid),
    Instant(DateTime<Utc>),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    Duration(TimeDelta),
}

impl Scalar<'_> {
    /// JSON rendering, matching the serde representation of the source type
    pub fn to_json(&self) -> Value {
        match *self {
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Int(i) => {
                if let Ok(small) = i64::try_from(i) {
                    Value::from(small)
                } else if let Ok(unsigned) = u64::try_from(i) {
                    Value::from(unsigned)
                } else {
                    Value::String(i.to_string())
                }
            }
            Scalar::UInt(u) => match u64::try_from(u) {
                Ok(small) => Value::from(small),
                Err(_) => Value::String(u.to_string()),
            },
            Scalar::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Scalar::Char(c) => Value::String(c.to_string()),
            Scalar::Text(s) => Value::String(s.to_string()),
            Scalar::Uuid(u) => Value::String(u.to_string()),
            Scalar::Instant(t) => Value::String(t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Scalar::DateTime(t) => Value::String(t.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            Scalar::Date(d) => Value::String(d.to_string()),
            Scalar::Time(t) => Value::String(t.to_string()),
            Scalar::Duration(d) => Value::String(d.to_string()),
        }
    }
}

fn float_eq_int(f: f64, i: i128) -> bool {
    f.is_finite() && f.fract() == 0.0 && f == i as f64 && f as i128 == i
}

fn float_eq_uint(f: f64, u: u128) -> bool {
    f.is_finite() && f.fract() == 0.0 && f == u as f64 && f as u128 == u
}

/// Compare a textual value against a typed one by parsing the text into the
/// typed side's representation. Covers JSON documents, where uuids, chars
/// and timestamps arrive as strings.
fn text_eq(text: &str, other: &Scalar<'_>) -> bool {
    match *other {
        Scalar::Char(c) => {
            let mut chars = text.chars();
            chars.next() == Some(c) && chars.next().is_none()
        }
        Scalar::Uuid(u) => Uuid::parse_str(text).is_ok_and(|parsed| parsed == u),
        Scalar::Instant(t) => DateTime::parse_from_rfc3339(text)
            .is_ok_and(|parsed| parsed.with_timezone(&Utc) == t),
        Scalar::DateTime(t) => text.parse::<NaiveDateTime>().is_ok_and(|p| p == t),
        Scalar::Date(d) => text.parse::<NaiveDate>().is_ok_and(|p| p == d),
        Scalar::Time(t) => text.parse::<NaiveTime>().is_ok_and(|p| p == t),
        _ => false,
    }
}

impl PartialEq for Scalar<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::UInt(a), Scalar::UInt(b)) => a == b,
            (Scalar::Int(i), Scalar::UInt(u)) | (Scalar::UInt(u), Scalar::Int(i)) => {
                i >= 0 && i as u128 == u
            }
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::Float(f), Scalar::Int(i)) | (Scalar::Int(i), Scalar::Float(f)) => {
                float_eq_int(f, i)
            }
            (Scalar::Float(f), Scalar::UInt(u)) | (Scalar::UInt(u), Scalar::Float(f)) => {
                float_eq_uint(f, u)
            }
            (Scalar::Char(a), Scalar::Char(b)) => a == b,
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Uuid(a), Scalar::Uuid(b)) => a == b,
            (Scalar::Instant(a), Scalar::Instant(b)) => a == b,
            (Scalar::DateTime(a), Scalar::DateTime(b)) => a == b,
            (Scalar::Date(a), Scalar::Date(b)) => a == b,
            (Scalar::Time(a), Scalar::Time(b)) => a == b,
            (Scalar::Duration(a), Scalar::Duration(b)) => a == b,
            (Scalar::Text(s), typed) | (typed, Scalar::Text(s)) => text_eq(s, &typed),
            _ => false,
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::UInt(u) => write!(f, "{}", u),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Char(c) => write!(f, "{:?}", c),
            Scalar::Text(s) => write!(f, "{:?}", s),
            Scalar::Uuid(u) => write!(f, "{}", u),
            Scalar::Instant(t) => write!(f, "{}", t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Scalar::DateTime(t) => write!(f, "{}", t),
            Scalar::Date(d) => write!(f, "{}", d),
            Scalar::Time(t) => write!(f, "{}", t),
            Scalar::Duration(d) => write!(f, "{}", d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_integers_compare_across_widths() {
        assert_eq!(Scalar::Int(5), Scalar::UInt(5));
        assert_ne!(Scalar::Int(-1), Scalar::UInt(u128::MAX));
        assert_eq!(Scalar::Int(2), Scalar::Float(2.0));
        assert_ne!(Scalar::Int(2), Scalar::Float(2.000_000_1));
    }

    #[test]
    fn test_float_equality_is_exact() {
        assert_ne!(Scalar::Float(0.1 + 0.2), Scalar::Float(0.3));
        assert_ne!(Scalar::Float(f64::NAN), Scalar::Float(f64::NAN));
    }

    #[test]
    fn test_text_matches_typed_values() {
        let id = Uuid::nil();
        assert_eq!(Scalar::Text("00000000-0000-0000-0000-000000000000"), Scalar::Uuid(id));
        let when = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(Scalar::Text("2024-05-01T14:00:00+02:00"), Scalar::Instant(when));
        assert_eq!(Scalar::Char('x'), Scalar::Text("x"));
        assert_ne!(Scalar::Char('x'), Scalar::Text("xy"));
        assert_ne!(Scalar::Text("1"), Scalar::Int(1));
    }

    #[test]
    fn test_to_json_follows_serde_shape() {
        assert_eq!(Scalar::Int(-3).to_json(), serde_json::json!(-3));
        assert_eq!(Scalar::Text("a").to_json(), serde_json::json!("a"));
        let when = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(
            Scalar::Instant(when).to_json(),
            serde_json::json!("2024-05-01T12:00:00Z")
        );
        assert_eq!(Scalar::Float(f64::INFINITY).to_json(), Value::Null);
    }
}
