//! Resolved column bindings.

use crate::record::{RecordRef, TypeRef};
use serde::Serialize;
use std::any::TypeId;
use std::fmt;

/// A field bound to a column name, located by its index path from the root
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Name of the record type declaring the field; empty for the root record.
    pub context: &'static str,
    /// Column the field is bound to.
    pub bound_name: &'static str,
    /// The field's name in its record type.
    pub declared_name: &'static str,
    /// Whether `bound_name` came from a tag rather than the declared name.
    pub explicitly_tagged: bool,
    /// Field indices from the root record through embedded records.
    pub path: Vec<usize>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl Field {
    /// Embedding depth; root-level fields have depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}); tagged? {}, indices: {:?}, type: {}",
            self.context, self.bound_name, self.explicitly_tagged, self.path, self.ty
        )
    }
}

/// The resolved fields of one record type, ordered by index path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSet {
    record: &'static str,
    #[serde(skip)]
    record_id: TypeId,
    fields: Vec<Field>,
}

impl FieldSet {
    pub(crate) fn new(root: RecordRef, fields: Vec<Field>) -> Self {
        Self {
            record: root.name(),
            record_id: root.id(),
            fields,
        }
    }

    /// Name of the root record type.
    #[must_use]
    pub const fn record(&self) -> &'static str {
        self.record
    }

    /// Identity of the root record type; only instances of it can be scanned
    /// with these fields.
    #[must_use]
    pub const fn record_id(&self) -> TypeId {
        self.record_id
    }

    /// Looks up the field bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.bound_name == name)
    }

    /// Bound names in field order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.bound_name)
    }

    /// Fields in index-path order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Fields as a slice, in index-path order.
    #[must_use]
    pub fn as_slice(&self) -> &[Field] {
        &self.fields
    }

    /// Number of bound fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
