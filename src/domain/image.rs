use crate::domain::list::Keyed;
use std::fmt;

/// Synthetic identity of an entry in the image list.
///
/// Keys are handed out by the owning list and never reused within it, so two
/// entries with the same URL remain distinguishable while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey(u64);

impl EntryKey {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// A single image URL in the sorter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub key: EntryKey,
    pub url: String,
}

impl ImageEntry {
    pub fn new(key: EntryKey, url: impl Into<String>) -> Self {
        Self {
            key,
            url: url.into(),
        }
    }
}

impl Keyed for ImageEntry {
    type Key = EntryKey;

    fn key(&self) -> &EntryKey {
        &self.key
    }
}

/// Hands out entry keys for one image list
#[derive(Debug, Clone)]
pub struct EntryKeyAllocator {
    next: u64,
}

impl EntryKeyAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Generates the next entry key
    pub fn next_key(&mut self) -> EntryKey {
        let key = EntryKey::new(self.next);
        self.next += 1;
        key
    }

    /// Wraps each URL in an entry with a fresh key, keeping order
    pub fn entries<I, S>(&mut self, urls: I) -> Vec<ImageEntry>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        urls.into_iter()
            .map(|url| ImageEntry::new(self.next_key(), url))
            .collect()
    }
}

impl Default for EntryKeyAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_key() {
        let mut keys = EntryKeyAllocator::new();

        let key1 = keys.next_key();
        assert_eq!(key1.value(), 1);
        assert_eq!(key1.to_string(), "item-1");

        let key2 = keys.next_key();
        assert_eq!(key2.value(), 2);
    }

    #[test]
    fn test_duplicate_urls_get_distinct_keys() {
        let mut keys = EntryKeyAllocator::new();
        let entries = keys.entries(["a.png", "a.png"]);

        assert_eq!(entries[0].url, entries[1].url);
        assert_ne!(entries[0].key, entries[1].key);
    }

    #[test]
    fn test_keys_not_reused_across_batches() {
        let mut keys = EntryKeyAllocator::new();
        let first = keys.entries(["a.png"]);
        let second = keys.entries(["a.png"]);
        assert_ne!(first[0].key, second[0].key);
    }
}
