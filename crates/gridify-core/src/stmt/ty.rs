use super::Value;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

/// Target value type of a field mapping.
///
/// Each mapping carries the static type of its accessor's output; the
/// predicate compiler uses it to parse the right-hand literal of a
/// comparison before any record is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 64-bit floating point number
    F64,

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    /// An instant in time, UTC
    DateTime,

    /// A civil date in the Gregorian calendar
    Date,

    /// A list of a single type
    List(Box<Type>),
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::F64
        )
    }

    /// The element type of a list, or the type itself.
    pub fn element(&self) -> &Type {
        match self {
            Self::List(inner) => inner,
            other => other,
        }
    }

    /// Parses a right-hand literal into this type.
    ///
    /// `None` is not an error: a comparison whose literal does not parse
    /// collapses to a constant predicate instead of failing. Parsing is
    /// locale-invariant and strict; surrounding whitespace is part of the
    /// literal and rejects it.
    pub fn parse_value(&self, raw: &str) -> Option<Value> {
        match self {
            Self::Bool => {
                if raw.eq_ignore_ascii_case("true") {
                    Some(Value::Bool(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Some(Value::Bool(false))
                } else {
                    None
                }
            }
            Self::String => Some(Value::String(raw.to_owned())),
            Self::I8 => raw.parse().ok().map(Value::I8),
            Self::I16 => raw.parse().ok().map(Value::I16),
            Self::I32 => raw.parse().ok().map(Value::I32),
            Self::I64 => raw.parse().ok().map(Value::I64),
            Self::U8 => raw.parse().ok().map(Value::U8),
            Self::U16 => raw.parse().ok().map(Value::U16),
            Self::U32 => raw.parse().ok().map(Value::U32),
            Self::U64 => raw.parse().ok().map(Value::U64),
            Self::F64 => raw.parse().ok().map(Value::F64),
            // Canonical hyphenated 8-4-4-4-12 form only.
            Self::Uuid => {
                if raw.len() == 36 {
                    uuid::Uuid::parse_str(raw).ok().map(Value::Uuid)
                } else {
                    None
                }
            }
            Self::DateTime => {
                if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
                    return Some(Value::DateTime(value.with_timezone(&Utc)));
                }

                // A naive ISO-8601 date-time reads as UTC.
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|value| Value::DateTime(value.and_utc()))
            }
            Self::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().map(Value::Date),
            // The DSL has no list literal; membership tests parse the
            // literal as the element type instead.
            Self::List(_) => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::String => f.write_str("string"),
            Self::I8 => f.write_str("i8"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::F64 => f.write_str("f64"),
            Self::Uuid => f.write_str("uuid"),
            Self::DateTime => f.write_str("datetime"),
            Self::Date => f.write_str("date"),
            Self::List(inner) => write!(f, "list<{inner}>"),
        }
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}
