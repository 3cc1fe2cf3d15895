//! Explicit in-memory memo of fetch results, keyed by request URL.
//!
//! Nothing expires on its own: entries stay until [`FetchCache::invalidate`] or
//! [`FetchCache::clear`] is called. Failed fetches are never stored.

use crate::models::CountryRecord;
use log::debug;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct FetchCache {
    entries: HashMap<String, Vec<CountryRecord>>,
}

impl FetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&[CountryRecord]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, rows: Vec<CountryRecord>) {
        self.entries.insert(key.into(), rows);
    }

    /// Drop one entry. Returns whether something was cached under `key`.
    pub fn invalidate(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!("cache: invalidated {key}");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached rows for `key`, or run `fetch` and cache its rows on success.
    pub fn get_or_try_fetch<E>(
        &mut self,
        key: &str,
        fetch: impl FnOnce() -> Result<Vec<CountryRecord>, E>,
    ) -> Result<Vec<CountryRecord>, E> {
        if let Some(rows) = self.entries.get(key) {
            debug!("cache: hit for {key} ({} rows)", rows.len());
            return Ok(rows.clone());
        }
        let rows = fetch()?;
        self.entries.insert(key.to_string(), rows.clone());
        Ok(rows)
    }
}
