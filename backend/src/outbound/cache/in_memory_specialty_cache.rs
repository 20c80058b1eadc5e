//! Process-local, tag-aware specialty cache.
//!
//! Entries are dropped lazily on read once their deadline passes, or eagerly
//! when one of their tags is invalidated.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{SpecialtyCache, SpecialtyCacheError};

#[derive(Debug, Clone)]
struct Entry {
    value: Vec<String>,
    expires_at: DateTime<Utc>,
    tags: Vec<&'static str>,
}

/// In-memory implementation of [`SpecialtyCache`].
pub struct InMemorySpecialtyCache {
    entries: Mutex<HashMap<String, Entry>>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemorySpecialtyCache {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl InMemorySpecialtyCache {
    /// Empty cache reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl SpecialtyCache for InMemorySpecialtyCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<String>>, SpecialtyCacheError> {
        let now = self.clock.utc();
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(
        &self,
        key: &str,
        value: Vec<String>,
        ttl: Duration,
        tags: &[&'static str],
    ) -> Result<(), SpecialtyCacheError> {
        let ttl = TimeDelta::from_std(ttl)
            .map_err(|err| SpecialtyCacheError::backend(format!("invalid ttl: {err}")))?;
        let expires_at = self
            .clock
            .utc()
            .checked_add_signed(ttl)
            .ok_or_else(|| SpecialtyCacheError::backend("ttl overflows the clock range"))?;
        self.lock().insert(
            key.to_owned(),
            Entry {
                value,
                expires_at,
                tags: tags.to_vec(),
            },
        );
        Ok(())
    }

    async fn invalidate(&self, tag: &str) -> Result<(), SpecialtyCacheError> {
        self.lock()
            .retain(|_, entry| !entry.tags.iter().any(|candidate| *candidate == tag));
        Ok(())
    }
}
