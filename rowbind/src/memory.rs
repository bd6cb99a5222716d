//! An in-memory [`RowSource`].

use crate::source::RowSource;
use rowbind_types::{ConversionError, ScanTarget, Value};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryRowsError {
    #[error("no current row")]
    NoCurrentRow,

    #[error("row has {values} values but {targets} targets were supplied")]
    Arity { values: usize, targets: usize },

    #[error("column {column}: {source}")]
    Conversion {
        column: String,
        #[source]
        source: ConversionError,
    },
}

/// Rows held in memory behind a fixed column list.
///
/// Like a database cursor, it starts before the first row; call
/// [`advance`](Self::advance) to move onto each row in turn.
#[derive(Debug, Clone, Default)]
pub struct MemoryRows {
    columns: Vec<String>,
    pending: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl MemoryRows {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            pending: VecDeque::new(),
            current: None,
        }
    }

    /// Queues a row.
    #[must_use]
    pub fn with_row(mut self, row: Vec<Value>) -> Self {
        self.push_row(row);
        self
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        self.pending.push_back(row);
    }

    /// Moves to the next row. Returns `false` once the rows are exhausted.
    pub fn advance(&mut self) -> bool {
        self.current = self.pending.pop_front();
        self.current.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<&[Value]> {
        self.current.as_deref()
    }
}

impl RowSource for MemoryRows {
    type Error = MemoryRowsError;

    fn columns(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.columns.clone())
    }

    fn populate(&mut self, targets: &mut [ScanTarget<'_>]) -> Result<(), Self::Error> {
        let row = self.current.as_ref().ok_or(MemoryRowsError::NoCurrentRow)?;
        if row.len() != targets.len() {
            return Err(MemoryRowsError::Arity {
                values: row.len(),
                targets: targets.len(),
            });
        }
        for ((target, value), column) in targets.iter_mut().zip(row).zip(&self.columns) {
            if target.is_discard() {
                continue;
            }
            target
                .assign(value.clone())
                .map_err(|source| MemoryRowsError::Conversion {
                    column: column.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}
