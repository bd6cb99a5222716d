use rowbind::{ConversionError, RowSource, ScanTarget, Value};
use rusqlite::types::ValueRef;

/// A `rusqlite` row, read as a [`RowSource`].
///
/// Columns bound to a discard target are never read.
pub struct SqliteRow<'a, 'stmt> {
    row: &'a rusqlite::Row<'stmt>,
}

impl<'a, 'stmt> SqliteRow<'a, 'stmt> {
    #[must_use]
    pub const fn new(row: &'a rusqlite::Row<'stmt>) -> Self {
        Self { row }
    }
}

fn to_value(value: ValueRef<'_>) -> Result<Value, ConversionError> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(n) => Value::Integer(n),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8(bytes.to_vec())?),
        ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
    })
}

impl RowSource for SqliteRow<'_, '_> {
    type Error = rusqlite::Error;

    fn columns(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self
            .row
            .as_ref()
            .column_names()
            .into_iter()
            .map(String::from)
            .collect())
    }

    fn populate(&mut self, targets: &mut [ScanTarget<'_>]) -> Result<(), Self::Error> {
        for (idx, target) in targets.iter_mut().enumerate() {
            if target.is_discard() {
                continue;
            }
            let raw = self.row.get_ref(idx)?;
            let data_type = raw.data_type();
            to_value(raw)
                .and_then(|value| target.assign(value))
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, data_type, Box::new(e)))?;
        }
        Ok(())
    }
}
