use crate::{ColumnValue, ConversionError, Value};
use std::fmt;

/// One addressable destination, handed to a row source per result column.
pub enum ScanTarget<'a> {
    /// A destination field; values are converted into its type.
    Field(&'a mut dyn ColumnValue),
    /// Accepts any value and drops it without conversion.
    Discard,
}

impl ScanTarget<'_> {
    /// Stores `value` into the target. A discard target always succeeds.
    pub fn assign(&mut self, value: Value) -> Result<(), ConversionError> {
        match self {
            Self::Field(field) => field.assign(value),
            Self::Discard => Ok(()),
        }
    }

    /// The field's current value; `None` for a discard target.
    #[must_use]
    pub fn current(&self) -> Option<Value> {
        match self {
            Self::Field(field) => Some(field.to_value()),
            Self::Discard => None,
        }
    }

    /// Whether the target drops its value; row sources may skip reading the
    /// column entirely.
    #[must_use]
    pub const fn is_discard(&self) -> bool {
        matches!(self, Self::Discard)
    }
}

impl fmt::Debug for ScanTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => f.debug_tuple("Field").field(&field.to_value()).finish(),
            Self::Discard => f.write_str("Discard"),
        }
    }
}
