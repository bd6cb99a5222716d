//! Error types for the row mapper.

use thiserror::Error;

/// A mismatch between a record's declared fields and the instance being
/// scanned into. These are programming errors, not data-access errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("{record}: no field at index path {path:?}")]
    NoSuchField {
        record: &'static str,
        path: Vec<usize>,
    },

    #[error("{record}: field at {path:?} is a column value, expected an embedded record")]
    NotARecord {
        record: &'static str,
        path: Vec<usize>,
    },

    #[error("{record}: field at {path:?} cannot receive a column value")]
    NotAColumn {
        record: &'static str,
        path: Vec<usize>,
    },

    #[error("fields resolved for {expected} cannot scan into {found}")]
    RecordMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors returned by a row scan.
///
/// Row source failures pass through unchanged in [`ScanError::Source`], so
/// callers can tell them apart from the mapper's own precondition checks.
#[derive(Debug, Error)]
pub enum ScanError<E> {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Source(E),
}

impl<E> ScanError<E> {
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// Returns the row source's error, if that is what this is.
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::Source(e) => Some(e),
            Self::Precondition(_) => None,
        }
    }
}

/// Errors loading a [`MapperConfig`](crate::MapperConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid mapper configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
