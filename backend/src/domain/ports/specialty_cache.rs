//! Port for caching the specialty catalogue.
//!
//! Entries expire after their time-to-live or when any of their tags is
//! invalidated, whichever comes first.

use std::time::Duration;

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by cache adapters.
    pub enum SpecialtyCacheError {
        /// Cache backend is unavailable.
        Backend { message: String } => "specialty cache backend failure: {message}",
    }
}

/// Tag-aware time-to-live cache for specialty name lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpecialtyCache: Send + Sync {
    /// Read a live entry.
    async fn get(&self, key: &str) -> Result<Option<Vec<String>>, SpecialtyCacheError>;

    /// Store `value` under `key` for `ttl`, labelled with `tags`.
    async fn put(
        &self,
        key: &str,
        value: Vec<String>,
        ttl: Duration,
        tags: &[&'static str],
    ) -> Result<(), SpecialtyCacheError>;

    /// Drop every entry labelled with `tag`.
    async fn invalidate(&self, tag: &str) -> Result<(), SpecialtyCacheError>;
}

/// Cache that never stores anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSpecialtyCache;

#[async_trait]
impl SpecialtyCache for NoOpSpecialtyCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<String>>, SpecialtyCacheError> {
        Ok(None)
    }

    async fn put(
        &self,
        _key: &str,
        _value: Vec<String>,
        _ttl: Duration,
        _tags: &[&'static str],
    ) -> Result<(), SpecialtyCacheError> {
        Ok(())
    }

    async fn invalidate(&self, _tag: &str) -> Result<(), SpecialtyCacheError> {
        Ok(())
    }
}
