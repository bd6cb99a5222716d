use crate::error::Result;
use crate::row::SqliteRow;
use rowbind::{Record, Session, mapper, quote_ident};
use rusqlite::{Connection, Params};
use tracing::debug;

/// Runs `sql` and maps every result row into a fresh `T`.
///
/// The statement's columns are bound to `T`'s fields once, before the first
/// row is read.
pub fn query_as<T, P>(session: &Session, conn: &Connection, sql: &str, params: P) -> Result<Vec<T>>
where
    T: Record + Default,
    P: Params,
{
    let mut stmt = conn.prepare(sql)?;
    let columns = stmt.column_names().into_iter().map(String::from).collect();
    let plan = session.plan::<T>(columns);

    let mut rows = stmt.query(params)?;
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        let mut record = T::default();
        plan.scan_row(&mut record, &mut SqliteRow::new(row))?;
        records.push(record);
    }
    debug!(record = T::NAME, rows = records.len(), "Mapped query result");
    Ok(records)
}

/// Runs `sql` and maps its first row, if any.
pub fn query_one<T, P>(session: &Session, conn: &Connection, sql: &str, params: P) -> Result<Option<T>>
where
    T: Record + Default,
    P: Params,
{
    let mut stmt = conn.prepare(sql)?;
    let columns = stmt.column_names().into_iter().map(String::from).collect();
    let plan = session.plan::<T>(columns);

    let mut rows = stmt.query(params)?;
    let Some(row) = rows.next()? else {
        return Ok(None);
    };
    let mut record = T::default();
    plan.scan_row(&mut record, &mut SqliteRow::new(row))?;
    Ok(Some(record))
}

/// `SELECT` of every field of `T` from `table`, each under its bound name.
///
/// Columns are left unqualified and referenced by their declared field
/// names, so `table` must have a column named after every declared field.
/// SQLite reads a double-quoted name that matches no column as a string
/// literal: a missing column then yields its own name as text instead of
/// an error.
pub fn select_sql<T: Record>(session: &Session, table: &str) -> String {
    let fields = session.fields::<T>();
    format!(
        "SELECT {} FROM {}",
        mapper::columns(&fields, false).join(", "),
        quote_ident(table)
    )
}
