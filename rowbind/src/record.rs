//! Record metadata and field access.
//!
//! Rust has no runtime reflection, so a record describes itself: the
//! [`Record`] trait yields a [`RecordType`] listing the declared fields in
//! declaration order, and [`Fields`] hands out disjoint mutable borrows of
//! those fields on an instance. The [`record!`](crate::record!) macro writes
//! both impls; [`RecordType::builder`] is available for hand-written ones.

use rowbind_types::ColumnValue;
use serde::{Serialize, Serializer};
use std::any::{self, TypeId};
use std::fmt;

/// Mutable access to one declared field of a record instance.
pub enum FieldMut<'a> {
    /// A field that receives column values.
    Column(&'a mut dyn ColumnValue),
    /// An embedded record, addressed by walking into its own fields.
    Record(&'a mut dyn Fields),
    /// A field that is declared but not accessible to the mapper.
    Opaque,
}

/// Disjoint mutable access to a record instance's declared fields.
///
/// `fields_mut` must return exactly one entry per field in the record's
/// [`RecordType`], in the same order.
pub trait Fields {
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// A record type whose fields can be bound to result columns.
pub trait Record: Fields + 'static {
    /// Type name, used as the context of the fields the record declares.
    const NAME: &'static str;

    /// Declared fields, in declaration order.
    fn record_type() -> RecordType;

    /// Identity handle used by the resolver and the field cache.
    fn record_ref() -> RecordRef {
        RecordRef::new(TypeId::of::<Self>(), Self::NAME, Self::record_type)
    }
}

impl<T: Fields + ?Sized> Fields for Box<T> {
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        (**self).fields_mut()
    }
}

// A boxed embed is traversed as the record it points to.
impl<T: Record> Record for Box<T> {
    const NAME: &'static str = T::NAME;

    fn record_type() -> RecordType {
        T::record_type()
    }

    fn record_ref() -> RecordRef {
        T::record_ref()
    }
}

/// A lazily described record type.
///
/// Nested record types are referenced rather than expanded so self-referential
/// embeddings (through `Box`) stay finite.
#[derive(Clone, Copy)]
pub struct RecordRef {
    id: TypeId,
    name: &'static str,
    describe: fn() -> RecordType,
}

impl RecordRef {
    #[must_use]
    pub const fn new(id: TypeId, name: &'static str, describe: fn() -> RecordType) -> Self {
        Self { id, name, describe }
    }

    #[must_use]
    pub fn of<T: Record>() -> Self {
        T::record_ref()
    }

    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Builds the record's field list.
    #[must_use]
    pub fn describe(&self) -> RecordType {
        (self.describe)()
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RecordRef {}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordRef").field(&self.name).finish()
    }
}

/// The type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRef {
    /// A scalar column type, named for diagnostics.
    Value(&'static str),
    /// A record type (after one level of `Box` indirection).
    Record(RecordRef),
}

impl TypeRef {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Value(name) => *name,
            Self::Record(record) => record.name,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordRef> {
        match self {
            Self::Record(record) => Some(record),
            Self::Value(_) => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One declared field of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    /// Non-exported fields keep their index but are never resolved.
    pub exported: bool,
    /// Embedded (anonymous) fields promote the fields of their record type.
    pub embedded: bool,
    /// Raw tag string, empty when untagged.
    pub tag: &'static str,
    pub ty: TypeRef,
}

/// A record type's declared fields, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    name: &'static str,
    fields: Vec<FieldDef>,
}

impl RecordType {
    #[must_use]
    pub fn new(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self { name, fields }
    }

    /// Starts a field list for `T`.
    #[must_use]
    pub fn builder<T: Record>() -> RecordTypeBuilder {
        RecordTypeBuilder {
            name: T::NAME,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}

/// Declares a record's fields one at a time, in declaration order.
#[derive(Debug)]
pub struct RecordTypeBuilder {
    name: &'static str,
    fields: Vec<FieldDef>,
}

impl RecordTypeBuilder {
    /// A field that receives a column value.
    #[must_use]
    pub fn column<T: ColumnValue>(mut self, name: &'static str, tag: &'static str) -> Self {
        self.fields.push(FieldDef {
            name,
            exported: true,
            embedded: false,
            tag,
            ty: TypeRef::Value(any::type_name::<T>()),
        });
        self
    }

    /// An embedded record whose fields are promoted into this one.
    #[must_use]
    pub fn embed<T: Record>(mut self, name: &'static str, tag: &'static str) -> Self {
        self.fields.push(FieldDef {
            name,
            exported: true,
            embedded: true,
            tag,
            ty: TypeRef::Record(T::record_ref()),
        });
        self
    }

    /// A field that occupies an index but is never mapped.
    #[must_use]
    pub fn private<T>(mut self, name: &'static str, tag: &'static str) -> Self {
        self.fields.push(FieldDef {
            name,
            exported: false,
            embedded: false,
            tag,
            ty: TypeRef::Value(any::type_name::<T>()),
        });
        self
    }

    #[must_use]
    pub fn build(self) -> RecordType {
        RecordType::new(self.name, self.fields)
    }
}

/// Implements [`Record`] and [`Fields`] for a struct.
///
/// Each entry is `kind field: Type` with an optional `= "tag"`, where `kind`
/// is `column` (scanned value), `embed` (embedded record, possibly boxed) or
/// `private` (never mapped). Entries must be listed in the order the
/// resolver should number them.
///
/// ```
/// use rowbind::record;
///
/// #[derive(Default)]
/// struct Base {
///     id: i64,
/// }
///
/// #[derive(Default)]
/// struct User {
///     base: Base,
///     name: String,
/// }
///
/// record!(Base { column id: i64 = "id" });
/// record!(User {
///     embed base: Base,
///     column name: String = "name",
/// });
/// ```
#[macro_export]
macro_rules! record {
    (@field_mut column $($place:tt)+) => {
        $crate::FieldMut::Column(&mut $($place)+)
    };
    (@field_mut embed $($place:tt)+) => {
        $crate::FieldMut::Record(&mut $($place)+)
    };
    (@field_mut private $($place:tt)+) => {
        $crate::FieldMut::Opaque
    };

    (@tag) => {
        ""
    };
    (@tag $tag:literal) => {
        $tag
    };

    ($name:ident { $($kind:ident $field:ident : $ty:ty $(= $tag:literal)?),* $(,)? }) => {
        impl $crate::Fields for $name {
            fn fields_mut(&mut self) -> ::std::vec::Vec<$crate::FieldMut<'_>> {
                ::std::vec![$($crate::record!(@field_mut $kind self.$field)),*]
            }
        }

        impl $crate::Record for $name {
            const NAME: &'static str = ::std::stringify!($name);

            fn record_type() -> $crate::RecordType {
                $crate::RecordType::builder::<Self>()
                    $(.$kind::<$ty>(::std::stringify!($field), $crate::record!(@tag $($tag)?)))*
                    .build()
            }
        }
    };
}
