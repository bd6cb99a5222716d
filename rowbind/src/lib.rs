//! Maps result rows onto record fields.
//!
//! Fields are bound to columns by name: a field's tag when it has one,
//! otherwise its declared name. Fields of embedded records are promoted into
//! the embedding record, with shadowing and ambiguity resolved the way struct
//! embedding resolves them:
//! - [`record!`]: declares a struct's fields, tags and embedded records
//! - [`resolver`]: computes the column bindings of a record type
//! - [`FieldCache`]: resolves each record type once
//! - [`ScanPlan`] / [`Session::scan`]: route a row's columns into a record
//! - [`Session::columns`]: the select list matching a record's bindings
//!
//! ```
//! use rowbind::{record, MemoryRows, Session, Value};
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
//! let session = Session::new();
//! let mut rows = MemoryRows::new(["name", "id"])
//!     .with_row(vec![Value::from("bob"), Value::from(7i64)]);
//! assert!(rows.advance());
//!
//! let mut d = Derived::default();
//! session.scan(&mut d, &mut rows).unwrap();
//! assert_eq!(d.name, "bob");
//! assert_eq!(d.base.id, 7);
//! ```

mod cache;
mod config;
mod error;
mod field;
pub mod mapper;
pub mod memory;
mod record;
pub mod resolver;
mod session;
mod source;
pub mod tag;

pub use cache::FieldCache;
pub use config::{MapperConfig, UnmappedPolicy};
pub use error::{ConfigError, PreconditionError, ScanError};
pub use field::{Field, FieldSet};
pub use mapper::{ScanPlan, quote_ident};
pub use memory::{MemoryRows, MemoryRowsError};
pub use record::{FieldDef, FieldMut, Fields, Record, RecordRef, RecordType, RecordTypeBuilder, TypeRef};
pub use rowbind_types::{ColumnValue, ConversionError, ScanTarget, Value};
pub use session::Session;
pub use source::RowSource;

use std::fmt;

/// Scans the source's current row into `dest`, resolving `T` through the
/// global cache.
pub fn scan<T, S>(dest: &mut T, source: &mut S) -> Result<(), ScanError<S::Error>>
where
    T: Record,
    S: RowSource + ?Sized,
{
    let fields = FieldCache::global().resolve::<T>();
    mapper::scan(dest, &fields, source, UnmappedPolicy::default())
}

/// Like [`scan`], but panics on error.
pub fn must_scan<T, S>(dest: &mut T, source: &mut S)
where
    T: Record,
    S: RowSource + ?Sized,
    S::Error: fmt::Display,
{
    if let Err(e) = scan(dest, source) {
        panic!("rowbind: scan into {} failed: {e}", T::NAME);
    }
}

/// Qualified column references for every field of `T`, resolved through the
/// global cache.
pub fn columns<T: Record>() -> Vec<String> {
    mapper::columns(&FieldCache::global().resolve::<T>(), true)
}
