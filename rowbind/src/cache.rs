//! Per-type memoization of resolved fields.

use crate::field::FieldSet;
use crate::record::{Record, RecordRef};
use crate::resolver;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

/// Resolved [`FieldSet`]s keyed by record type.
///
/// Each record type is resolved at most once per cache; later lookups return
/// the same `Arc`. Entries are never evicted since record shapes are fixed
/// for the life of the process.
#[derive(Debug, Default)]
pub struct FieldCache {
    entries: RwLock<HashMap<TypeId, Arc<FieldSet>>>,
}

impl FieldCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by the crate-level helpers.
    pub fn global() -> &'static FieldCache {
        static GLOBAL: OnceLock<FieldCache> = OnceLock::new();
        GLOBAL.get_or_init(FieldCache::new)
    }

    /// Returns the fields of `T`, resolving them on first use.
    pub fn resolve<T: Record>(&self) -> Arc<FieldSet> {
        self.resolve_ref(T::record_ref())
    }

    pub fn resolve_ref(&self, record: RecordRef) -> Arc<FieldSet> {
        let id = record.id();
        if let Some(fields) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return Arc::clone(fields);
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have resolved it while we waited for the lock.
        if let Some(fields) = entries.get(&id) {
            return Arc::clone(fields);
        }
        let fields = Arc::new(resolver::resolve_ref(record));
        debug!(
            record = record.name(),
            fields = fields.len(),
            "Resolved record fields"
        );
        entries.insert(id, Arc::clone(&fields));
        fields
    }

    /// Whether `T` has been resolved by this cache.
    #[must_use]
    pub fn contains<T: Record>(&self) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&T::record_ref().id())
    }

    /// Number of record types resolved so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
