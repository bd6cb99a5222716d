//! Field types a column can be scanned into.

use crate::{ConversionError, Value};

/// A field that can receive a column value.
///
/// Implementations convert the incoming [`Value`] into their own type and
/// overwrite `self`; on error `self` is left unchanged. The trait is
/// dyn-compatible so the mapper can hand a row source a heterogeneous list of
/// `&mut dyn ColumnValue` targets.
pub trait ColumnValue {
    /// Replaces the field's value with `value`, converting as needed.
    fn assign(&mut self, value: Value) -> Result<(), ConversionError>;

    /// Returns the field's current value.
    fn to_value(&self) -> Value;
}

fn mismatch(target: &'static str, found: &Value) -> ConversionError {
    match found {
        Value::Null => ConversionError::UnexpectedNull { target },
        other => ConversionError::Mismatch {
            target,
            found: other.type_name(),
        },
    }
}

macro_rules! integer_column {
    ($($ty:ty),* $(,)?) => {$(
        impl ColumnValue for $ty {
            fn assign(&mut self, value: Value) -> Result<(), ConversionError> {
                let n = match value {
                    Value::Integer(n) => n,
                    other => return Err(mismatch(stringify!($ty), &other)),
                };
                *self = <$ty>::try_from(n).map_err(|_| ConversionError::OutOfRange {
                    target: stringify!($ty),
                    value: n,
                })?;
                Ok(())
            }

            fn to_value(&self) -> Value {
                Value::Integer(i64::from(*self))
            }
        }
    )*};
}

integer_column!(i8, i16, i32, i64, u8, u16, u32);

impl ColumnValue for f64 {
    fn assign(&mut self, value: Value) -> Result<(), ConversionError> {
        *self = match value {
            Value::Real(r) => r,
            Value::Integer(n) => n as f64,
            other => return Err(mismatch("f64", &other)),
        };
        Ok(())
    }

    fn to_value(&self) -> Value {
        Value::Real(*self)
    }
}

impl ColumnValue for f32 {
    fn assign(&mut self, value: Value) -> Result<(), ConversionError> {
        *self = match value {
            Value::Real(r) => r as f32,
            Value::Integer(n) => n as f32,
            other => return Err(mismatch("f32", &other)),
        };
        Ok(())
    }

    fn to_value(&self) -> Value {
        Value::Real(f64::from(*self))
    }
}

impl ColumnValue for bool {
    fn assign(&mut self, value: Value) -> Result<(), ConversionError> {
        *self = match value {
            Value::Integer(n) => n != 0,
            other => return Err(mismatch("bool", &other)),
        };
        Ok(())
    }

    fn to_value(&self) -> Value {
        Value::Integer(i64::from(*self))
    }
}

impl ColumnValue for String {
    fn assign(&mut self, value: Value) -> Result<(), ConversionError> {
        *self = match value {
            Value::Text(s) => s,
            Value::Blob(b) => String::from_utf8(b)?,
            Value::Integer(n) => n.to_string(),
            Value::Real(r) => r.to_string(),
            Value::Null => return Err(ConversionError::UnexpectedNull { target: "String" }),
        };
        Ok(())
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ColumnValue for Vec<u8> {
    fn assign(&mut self, value: Value) -> Result<(), ConversionError> {
        *self = match value {
            Value::Blob(b) => b,
            Value::Text(s) => s.into_bytes(),
            other => return Err(mismatch("Vec<u8>", &other)),
        };
        Ok(())
    }

    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }
}

impl<T: ColumnValue + Default> ColumnValue for Option<T> {
    fn assign(&mut self, value: Value) -> Result<(), ConversionError> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        let mut inner = T::default();
        inner.assign(value)?;
        *self = Some(inner);
        Ok(())
    }

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ColumnValue::to_value)
    }
}
