//! Mapping sessions.
//!
//! A [`Session`] pairs a [`FieldCache`] with a [`MapperConfig`]. Sessions are
//! cheap to clone and share their cache, so one session (or several sharing
//! one cache) can serve a whole application.

use crate::cache::FieldCache;
use crate::config::MapperConfig;
use crate::error::ScanError;
use crate::field::FieldSet;
use crate::mapper::{self, ScanPlan};
use crate::record::Record;
use crate::source::RowSource;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Session {
    cache: Arc<FieldCache>,
    config: MapperConfig,
}

impl Session {
    /// Creates a session with its own empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session backed by a shared cache.
    #[must_use]
    pub fn with_cache(cache: Arc<FieldCache>) -> Self {
        Self {
            cache,
            config: MapperConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<FieldCache> {
        &self.cache
    }

    /// Resolved fields of `T`.
    pub fn fields<T: Record>(&self) -> Arc<FieldSet> {
        self.cache.resolve::<T>()
    }

    /// Column references selecting every field of `T` under its bound name.
    pub fn columns<T: Record>(&self) -> Vec<String> {
        mapper::columns(&self.fields::<T>(), self.config.qualify_columns)
    }

    /// [`columns`](Self::columns), joined for use in a select list.
    pub fn column_list<T: Record>(&self) -> String {
        self.columns::<T>().join(", ")
    }

    /// Binds a result's columns to the fields of `T`, for scanning many rows.
    pub fn plan<T: Record>(&self, columns: Vec<String>) -> ScanPlan {
        ScanPlan::with_policy(&self.fields::<T>(), columns, self.config.unmapped_columns)
    }

    /// Scans the source's current row into `dest`.
    ///
    /// Columns with no bound field are discarded; fields with no column are
    /// left unchanged.
    pub fn scan<T, S>(&self, dest: &mut T, source: &mut S) -> Result<(), ScanError<S::Error>>
    where
        T: Record,
        S: RowSource + ?Sized,
    {
        let fields = self.fields::<T>();
        mapper::scan(dest, &fields, source, self.config.unmapped_columns)
    }

    /// Like [`scan`](Self::scan), but panics on error.
    pub fn must_scan<T, S>(&self, dest: &mut T, source: &mut S)
    where
        T: Record,
        S: RowSource + ?Sized,
        S::Error: fmt::Display,
    {
        if let Err(e) = self.scan(dest, source) {
            panic!("rowbind: scan into {} failed: {e}", T::NAME);
        }
    }
}
