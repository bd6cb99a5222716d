//! Column projection and row scanning.
//!
//! A [`ScanPlan`] binds the columns of one result set to field paths once;
//! every row of that result is then scanned by handing the row source one
//! [`ScanTarget`] per column.

use crate::config::UnmappedPolicy;
use crate::error::{PreconditionError, ScanError};
use crate::field::{Field, FieldSet};
use crate::record::{FieldMut, Fields, Record};
use crate::source::RowSource;
use rowbind_types::{ScanTarget, Value};
use std::any::TypeId;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

/// Quotes an SQL identifier, doubling embedded quotes.
#[must_use]
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// The column reference that selects `field` under its bound name.
#[must_use]
pub fn column_ref(field: &Field, qualify: bool) -> String {
    let column = if qualify && !field.context.is_empty() {
        format!(
            "{}.{}",
            quote_ident(field.context),
            quote_ident(field.declared_name)
        )
    } else {
        quote_ident(field.declared_name)
    };
    if field.bound_name == field.declared_name {
        column
    } else {
        format!("{column} AS {}", quote_ident(field.bound_name))
    }
}

/// Column references for every field, in field order.
#[must_use]
pub fn columns(fields: &FieldSet, qualify: bool) -> Vec<String> {
    fields.iter().map(|f| column_ref(f, qualify)).collect()
}

/// Column-to-field bindings for one result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    record: &'static str,
    record_id: TypeId,
    columns: Vec<String>,
    /// Field path per column; `None` discards the column.
    bindings: Vec<Option<Vec<usize>>>,
}

impl ScanPlan {
    /// Binds `columns` to `fields`, warning about unmapped columns.
    #[must_use]
    pub fn new(fields: &FieldSet, columns: Vec<String>) -> Self {
        Self::with_policy(fields, columns, UnmappedPolicy::default())
    }

    #[must_use]
    pub fn with_policy(fields: &FieldSet, columns: Vec<String>, policy: UnmappedPolicy) -> Self {
        let by_name: HashMap<&str, &Field> = fields.iter().map(|f| (f.bound_name, f)).collect();
        let mut claimed: HashSet<&[usize]> = HashSet::new();
        let record = fields.record();

        let bindings = columns
            .iter()
            .map(|column| {
                let Some(field) = by_name.get(column.as_str()) else {
                    match policy {
                        UnmappedPolicy::Warn => {
                            warn!(column = %column, record, "Column has no bound field, discarding");
                        }
                        UnmappedPolicy::Debug => {
                            debug!(column = %column, record, "Column has no bound field, discarding");
                        }
                        UnmappedPolicy::Ignore => {}
                    }
                    return None;
                };
                if !claimed.insert(field.path.as_slice()) {
                    warn!(column = %column, record, "Column repeated in result, later occurrence discarded");
                    return None;
                }
                Some(field.path.clone())
            })
            .collect();

        Self {
            record,
            record_id: fields.record_id(),
            columns,
            bindings,
        }
    }

    /// Result columns, in result order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Columns that will be discarded, in result order.
    pub fn unmapped(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .zip(&self.bindings)
            .filter(|(_, binding)| binding.is_none())
            .map(|(column, _)| column.as_str())
    }

    /// Each column with the field path it is bound to.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, Option<&[usize]>)> {
        self.columns
            .iter()
            .zip(&self.bindings)
            .map(|(column, binding)| (column.as_str(), binding.as_deref()))
    }

    /// Borrows one target per column from `dest`, which must be an instance
    /// of the record type the plan was built for.
    pub fn targets<'a, T: Record>(
        &self,
        dest: &'a mut T,
    ) -> Result<Vec<ScanTarget<'a>>, PreconditionError> {
        if T::record_ref().id() != self.record_id {
            return Err(PreconditionError::RecordMismatch {
                expected: self.record,
                found: T::NAME,
            });
        }
        let requests: Vec<(usize, &[usize])> = self
            .bindings
            .iter()
            .enumerate()
            .filter_map(|(column, binding)| binding.as_deref().map(|path| (column, path)))
            .collect();

        let mut slots: Vec<Option<ScanTarget<'a>>> = self.bindings.iter().map(|_| None).collect();
        collect_targets(self.record, dest, &[], &requests, &mut slots)?;
        Ok(slots
            .into_iter()
            .map(|slot| slot.unwrap_or(ScanTarget::Discard))
            .collect())
    }

    /// Scans the source's current row into `dest`.
    ///
    /// If the source fails part way through the row, fields it already wrote
    /// are restored, so `dest` is left as it was.
    pub fn scan_row<T, S>(&self, dest: &mut T, source: &mut S) -> Result<(), ScanError<S::Error>>
    where
        T: Record,
        S: RowSource + ?Sized,
    {
        let mut targets = self.targets(dest)?;
        let previous: Vec<Option<Value>> = targets.iter().map(ScanTarget::current).collect();
        if let Err(e) = source.populate(&mut targets) {
            for (target, value) in targets.iter_mut().zip(previous) {
                if let Some(value) = value {
                    // A field always accepts the value it produced.
                    let _ = target.assign(value);
                }
            }
            return Err(ScanError::Source(e));
        }
        Ok(())
    }
}

/// Hands out the fields requested by `requests` (column index, path relative
/// to `dest`) into `slots`, walking into embedded records as needed.
fn collect_targets<'a>(
    record: &'static str,
    dest: &'a mut dyn Fields,
    prefix: &[usize],
    requests: &[(usize, &[usize])],
    slots: &mut [Option<ScanTarget<'a>>],
) -> Result<(), PreconditionError> {
    let mut by_index: BTreeMap<usize, Vec<(usize, &[usize])>> = BTreeMap::new();
    for &(column, path) in requests {
        if let Some((&head, rest)) = path.split_first() {
            by_index.entry(head).or_default().push((column, rest));
        }
    }

    let mut fields: Vec<Option<FieldMut<'a>>> = dest.fields_mut().into_iter().map(Some).collect();
    for (index, group) in by_index {
        let mut path = prefix.to_vec();
        path.push(index);
        let field = fields
            .get_mut(index)
            .and_then(Option::take)
            .ok_or_else(|| PreconditionError::NoSuchField {
                record,
                path: path.clone(),
            })?;

        match field {
            FieldMut::Column(value) => match group.as_slice() {
                [(column, [])] => slots[*column] = Some(ScanTarget::Field(value)),
                _ => return Err(PreconditionError::NotARecord { record, path }),
            },
            FieldMut::Record(inner) => {
                if group.iter().any(|(_, rest)| rest.is_empty()) {
                    return Err(PreconditionError::NotAColumn { record, path });
                }
                collect_targets(record, inner, &path, &group, slots)?;
            }
            FieldMut::Opaque => return Err(PreconditionError::NotAColumn { record, path }),
        }
    }
    Ok(())
}

/// Scans the source's current row into `dest` using the resolved `fields`.
///
/// Columns without a bound field are discarded and reported according to
/// `policy`; fields without a column are left untouched. `fields` must have
/// been resolved for `T`.
pub fn scan<T, S>(
    dest: &mut T,
    fields: &FieldSet,
    source: &mut S,
    policy: UnmappedPolicy,
) -> Result<(), ScanError<S::Error>>
where
    T: Record,
    S: RowSource + ?Sized,
{
    let columns = source.columns().map_err(ScanError::Source)?;
    ScanPlan::with_policy(fields, columns, policy).scan_row(dest, source)
}
