//! Memoization keyed by font name.

use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use log::trace;

/// A name-keyed result cache.
///
/// Values are computed outside the lock: two callers racing on the same
/// missing key may both compute, the first to insert wins and both get the
/// stored value. With a capacity set, the oldest entry is evicted first.
#[derive(Debug)]
pub struct Memo<V> {
    entries: Mutex<IndexMap<String, V>>,
    capacity: Option<usize>,
}

impl<V: Clone> Default for Memo<V> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<V: Clone> Memo<V> {
    /// Create a cache holding at most `capacity` entries (`None` for no limit).
    pub fn new(capacity: Option<usize>) -> Self {
        Self { entries: Mutex::new(IndexMap::new()), capacity }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Some(capacity))
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.lock().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Insert `value` unless `key` is already present, returning the stored value.
    pub fn insert(&self, key: &str, value: V) -> V {
        let mut entries = self.lock();
        if let Some(existing) = entries.get(key) {
            return existing.clone();
        }
        match self.capacity {
            Some(0) => return value,
            Some(capacity) => {
                while entries.len() >= capacity {
                    if let Some((evicted, _)) = entries.shift_remove_index(0) {
                        trace!("Evicted {evicted:?}");
                    }
                }
            }
            None => {}
        }
        entries.insert(key.to_owned(), value.clone());
        value
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// Errors from `f` are returned as-is and nothing is stored.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: &str,
        f: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.get(key) {
            trace!("Cache hit for {key:?}");
            return Ok(value);
        }
        trace!("Cache miss for {key:?}");
        let value = f()?;
        Ok(self.insert(key, value))
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.lock().shift_remove(key)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
