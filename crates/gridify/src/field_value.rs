use gridify_core::stmt::{Type, Value};

use chrono::{DateTime, NaiveDate, Utc};

/// A Rust type that can back a field mapping.
///
/// The associated [`Type`] drives right-hand literal parsing; the conversion
/// produces the [`Value`] a compiled predicate compares against.
pub trait FieldValue {
    fn ty() -> Type;

    fn into_value(self) -> Value;
}

/// Macro to generate FieldValue implementations for types whose `Value`
/// variant holds them directly
macro_rules! impl_field_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )*
    };
}

impl_field_value! {
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

// Pointer-sized integers map to fixed-size types internally
impl FieldValue for isize {
    fn ty() -> Type {
        Type::I64
    }

    fn into_value(self) -> Value {
        Value::I64(self as i64)
    }
}

impl FieldValue for usize {
    fn ty() -> Type {
        Type::U64
    }

    fn into_value(self) -> Value {
        Value::U64(self as u64)
    }
}

impl<V: FieldValue> FieldValue for Option<V> {
    fn ty() -> Type {
        V::ty()
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}

impl<V: FieldValue> FieldValue for Vec<V> {
    fn ty() -> Type {
        Type::list(V::ty())
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(FieldValue::into_value).collect())
    }
}
