//! Column value model for rowbind.
//!
//! This crate defines the types exchanged between the row mapper and a row
//! source:
//! - [`Value`]: a single column value as handed over by a row source
//! - [`ColumnValue`]: implemented by every field type a column can be scanned into
//! - [`ScanTarget`]: one addressable slot per result column (a field or a discard)
//!
//! Row sources depend on this crate alone; the field resolution and mapping
//! machinery lives in `rowbind`.

mod column;
mod target;
mod value;

pub use column::ColumnValue;
pub use target::ScanTarget;
pub use value::Value;

/// Errors raised while converting a [`Value`] into a field's Rust type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("cannot assign null to non-optional {target}")]
    UnexpectedNull { target: &'static str },

    #[error("cannot assign {found} value to {target}")]
    Mismatch {
        target: &'static str,
        found: &'static str,
    },

    #[error("integer {value} out of range for {target}")]
    OutOfRange { target: &'static str, value: i64 },

    #[error("invalid UTF-8 in text value: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
