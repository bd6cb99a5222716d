//! SQLite support for rowbind.
//!
//! [`SqliteRow`] exposes a `rusqlite` row as a [`RowSource`](rowbind::RowSource);
//! [`query_as`] and [`query_one`] run a statement and map every row into a
//! record, binding the statement's columns once.
//!
//! ```
//! use rowbind::{record, Session};
//! use rusqlite::Connection;
//!
//! #[derive(Default)]
//! struct Base {
//!     id: i64,
//! }
//!
//! #[derive(Default)]
//! struct Derived {
//!     base: Base,
//!     name: String,
//! }
//!
//! record!(Base { column id: i64 = "id" });
//! record!(Derived {
//!     embed base: Base,
//!     column name: String = "name",
//! });
//!
//! let conn = Connection::open_in_memory().unwrap();
//! conn.execute_batch("CREATE TABLE people (id INTEGER, name TEXT);
//!                     INSERT INTO people VALUES (7, 'bob');").unwrap();
//!
//! let session = Session::new();
//! let people: Vec<Derived> =
//!     rowbind_sqlite::query_as(&session, &conn, "SELECT name, id FROM people", []).unwrap();
//! assert_eq!(people[0].base.id, 7);
//! assert_eq!(people[0].name, "bob");
//! ```

mod error;
mod query;
mod row;

pub use error::{Error, Result};
pub use query::{query_as, query_one, select_sql};
pub use row::SqliteRow;
