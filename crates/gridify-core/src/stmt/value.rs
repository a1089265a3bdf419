use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;
use std::fmt;

/// A typed field value.
///
/// Accessors produce these and the predicate compiler parses right-hand
/// literals into them; comparisons happen between two `Value`s.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// 128-bit universally unique identifier (UUID)
    Uuid(uuid::Uuid),

    /// An instant in time, UTC
    DateTime(DateTime<Utc>),

    /// A civil date in the Gregorian calendar
    Date(NaiveDate),

    /// A list of values of the same type
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(&**value),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl PartialOrd for Value {
    /// Compares two values if they are of the same type.
    ///
    /// Returns `None` for:
    ///
    /// - `null` values (SQL semantics, e.g., `null` comparisons are undefined)
    /// - Comparisons across different types
    /// - Types without natural ordering (lists)
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            // `null` comparisons are undefined.
            (Self::Null, _) | (_, Self::Null) => None,

            // Booleans.
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),

            // Signed integers.
            (Self::I8(a), Self::I8(b)) => a.partial_cmp(b),
            (Self::I16(a), Self::I16(b)) => a.partial_cmp(b),
            (Self::I32(a), Self::I32(b)) => a.partial_cmp(b),
            (Self::I64(a), Self::I64(b)) => a.partial_cmp(b),

            // Unsigned integers.
            (Self::U8(a), Self::U8(b)) => a.partial_cmp(b),
            (Self::U16(a), Self::U16(b)) => a.partial_cmp(b),
            (Self::U32(a), Self::U32(b)) => a.partial_cmp(b),
            (Self::U64(a), Self::U64(b)) => a.partial_cmp(b),

            // Floats.
            (Self::F64(a), Self::F64(b)) => a.partial_cmp(b),

            // Strings: lexicographic ordering.
            (Self::String(a), Self::String(b)) => a.partial_cmp(b),

            // UUIDs.
            (Self::Uuid(a), Self::Uuid(b)) => a.partial_cmp(b),

            // Date/time types.
            (Self::DateTime(a), Self::DateTime(b)) => a.partial_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.partial_cmp(b),

            // Types without natural ordering or different types.
            _ => None,
        }
    }
}

/// Renders the value as it would appear in a filter literal.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => value.fmt(f),
            Self::I8(value) => value.fmt(f),
            Self::I16(value) => value.fmt(f),
            Self::I32(value) => value.fmt(f),
            Self::I64(value) => value.fmt(f),
            Self::U8(value) => value.fmt(f),
            Self::U16(value) => value.fmt(f),
            Self::U32(value) => value.fmt(f),
            Self::U64(value) => value.fmt(f),
            Self::F64(value) => value.fmt(f),
            Self::String(value) => value.fmt(f),
            Self::Uuid(value) => value.fmt(f),
            Self::DateTime(value) => value.to_rfc3339().fmt(f),
            Self::Date(value) => value.fmt(f),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("null"),
        }
    }
}

// === Conversions ===

macro_rules! impl_value_from {
    ( $($ty:ty => $variant:ident),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Self {
                    Self::$variant(src)
                }
            }
        )*
    };
}

impl_value_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f64 => F64,
    String => String,
    uuid::Uuid => Uuid,
    DateTime<Utc> => DateTime,
    NaiveDate => Date,
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(value) => Ok(value),
            _ => Err(err!("value is not of type string")),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I64(value) => Ok(value),
            _ => Err(err!("value is not of type i64")),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(value) => Ok(value),
            _ => Err(err!("value is not of type bool")),
        }
    }
}

impl TryFrom<Value> for uuid::Uuid {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Uuid(value) => Ok(value),
            _ => Err(err!("value is not of type UUID")),
        }
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTime(value) => Ok(value),
            _ => Err(err!("value is not of type DateTime<Utc>")),
        }
    }
}
