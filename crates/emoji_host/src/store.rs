//! Emoji table persistence contract and in-memory adapter.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use thiserror::Error;

use crate::record::EmojiRecord;
use crate::time::next_monotonic_timestamp_ms;

/// Failures reported by an [`EmojiTableStore`] backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The storage backend could not be reached or opened.
    #[error("emoji store unavailable: {0}")]
    Unavailable(String),
    /// A persisted payload could not be decoded.
    #[error("emoji store payload corrupt: {0}")]
    Corrupt(String),
    /// The backend rejected a write or delete.
    #[error("emoji store rejected the operation: {0}")]
    Rejected(String),
}

/// Object-safe boxed future used by [`EmojiTableStore`] async methods.
pub type EmojiTableFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Persistence service for the emoji record table.
///
/// The collection core treats implementations as the authoritative store and
/// applies in-memory changes only after an operation confirms success.
pub trait EmojiTableStore {
    /// Lists every record, newest-created-first.
    fn list_all<'a>(&'a self) -> EmojiTableFuture<'a, Result<Vec<EmojiRecord>, StoreError>>;

    /// Creates a record and returns it fully populated with the assigned id
    /// and timestamps.
    fn create<'a>(
        &'a self,
        emoji: &'a str,
        description: Option<&'a str>,
        tags: &'a [String],
    ) -> EmojiTableFuture<'a, Result<EmojiRecord, StoreError>>;

    /// Deletes a record by id. Deleting a missing id succeeds.
    fn delete<'a>(&'a self, id: &'a str) -> EmojiTableFuture<'a, Result<(), StoreError>>;

    /// Server-side-style substring search across emoji, description, and tag
    /// membership, newest-first. The collection core filters locally and does
    /// not call this; it exists for callers that want a store-side path.
    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> EmojiTableFuture<'a, Result<Vec<EmojiRecord>, StoreError>>;
}

/// Store-side search predicate: case-insensitive substring match on the glyph
/// or description, or exact membership in the tag set.
pub fn record_matches_query(record: &EmojiRecord, query: &str) -> bool {
    let query_lower = query.to_lowercase();
    record.emoji.to_lowercase().contains(&query_lower)
        || record
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&query_lower))
        || record.has_tag(&query_lower)
}

/// Sorts records newest-created-first, keeping insertion order among records
/// that share a timestamp.
pub fn sort_newest_first(records: &mut [EmojiRecord]) {
    records.sort_by(|a, b| {
        b.created_at_unix_ms
            .unwrap_or(0)
            .cmp(&a.created_at_unix_ms.unwrap_or(0))
    });
}

/// In-memory emoji table for tests and host-target wiring.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmojiTableStore {
    inner: Rc<RefCell<Vec<EmojiRecord>>>,
}

impl MemoryEmojiTableStore {
    /// Creates a store pre-populated with `records`.
    pub fn with_records(records: Vec<EmojiRecord>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(records)),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns true when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl EmojiTableStore for MemoryEmojiTableStore {
    fn list_all<'a>(&'a self) -> EmojiTableFuture<'a, Result<Vec<EmojiRecord>, StoreError>> {
        Box::pin(async move {
            let mut records = self.inner.borrow().clone();
            sort_newest_first(&mut records);
            Ok(records)
        })
    }

    fn create<'a>(
        &'a self,
        emoji: &'a str,
        description: Option<&'a str>,
        tags: &'a [String],
    ) -> EmojiTableFuture<'a, Result<EmojiRecord, StoreError>> {
        Box::pin(async move {
            let now = next_monotonic_timestamp_ms();
            let record = EmojiRecord {
                id: now.to_string(),
                emoji: emoji.to_string(),
                description: description.map(str::to_string),
                tags: tags.to_vec(),
                created_at_unix_ms: Some(now),
                updated_at_unix_ms: Some(now),
            };
            self.inner.borrow_mut().push(record.clone());
            Ok(record)
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> EmojiTableFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.inner.borrow_mut().retain(|record| record.id != id);
            Ok(())
        })
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> EmojiTableFuture<'a, Result<Vec<EmojiRecord>, StoreError>> {
        Box::pin(async move {
            let mut records = self
                .inner
                .borrow()
                .iter()
                .filter(|record| record_matches_query(record, query))
                .cloned()
                .collect::<Vec<_>>();
            sort_newest_first(&mut records);
            Ok(records)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn create_assigns_unique_ids_and_timestamps() {
        let store = MemoryEmojiTableStore::default();
        let store_obj: &dyn EmojiTableStore = &store;

        let first = block_on(store_obj.create("✨", Some("Sparkles"), &tags(&["aesthetic"])))
            .expect("create first");
        let second = block_on(store_obj.create("🌙", None, &[])).expect("create second");

        assert_ne!(first.id, second.id);
        assert!(first.created_at_unix_ms.is_some());
        assert_eq!(first.description.as_deref(), Some("Sparkles"));
        assert!(second.description.is_none());
    }

    #[test]
    fn list_all_returns_newest_first() {
        let store = MemoryEmojiTableStore::default();
        let store_obj: &dyn EmojiTableStore = &store;

        block_on(store_obj.create("✈️", Some("Airplane"), &[])).expect("create");
        block_on(store_obj.create("🌙", Some("Moon"), &[])).expect("create");
        block_on(store_obj.create("⭐", Some("Star"), &[])).expect("create");

        let listed = block_on(store_obj.list_all()).expect("list");
        let glyphs = listed.iter().map(|r| r.emoji.as_str()).collect::<Vec<_>>();
        assert_eq!(glyphs, vec!["⭐", "🌙", "✈️"]);
    }

    #[test]
    fn delete_is_idempotent() {
        let store = MemoryEmojiTableStore::default();
        let store_obj: &dyn EmojiTableStore = &store;

        let created = block_on(store_obj.create("☕", Some("Coffee"), &[])).expect("create");
        block_on(store_obj.delete(&created.id)).expect("delete");
        block_on(store_obj.delete(&created.id)).expect("delete again");
        block_on(store_obj.delete("never-existed")).expect("delete missing");

        assert!(block_on(store_obj.list_all()).expect("list").is_empty());
    }

    #[test]
    fn search_matches_glyph_description_and_tag_membership() {
        let store = MemoryEmojiTableStore::default();
        let store_obj: &dyn EmojiTableStore = &store;

        block_on(store_obj.create("✈️", Some("Airplane Travel"), &tags(&["travel", "transport"])))
            .expect("create");
        block_on(store_obj.create("🌙", Some("Crescent Moon"), &tags(&["aesthetic", "night"])))
            .expect("create");

        let by_description = block_on(store_obj.search("moon")).expect("search");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].emoji, "🌙");

        let by_tag = block_on(store_obj.search("transport")).expect("search");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].emoji, "✈️");

        // Tag matching is membership, not substring.
        assert!(block_on(store_obj.search("transp")).expect("search").is_empty());
    }

    #[test]
    fn query_predicate_is_case_insensitive_on_text_fields() {
        let record = EmojiRecord {
            id: "1".to_string(),
            emoji: ":D".to_string(),
            description: Some("Big Grin".to_string()),
            tags: vec!["happy".to_string()],
            created_at_unix_ms: None,
            updated_at_unix_ms: None,
        };
        assert!(record_matches_query(&record, "GRIN"));
        assert!(record_matches_query(&record, ":d"));
        assert!(record_matches_query(&record, "HAPPY"));
        assert!(!record_matches_query(&record, "sad"));
    }
}
