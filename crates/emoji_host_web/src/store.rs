//! `localStorage`-backed emoji table store.
//!
//! The table is one JSON array of records under [`COLLECTION_STORAGE_KEY`].
//! Ids and creation times come from the shared monotonic millisecond clock,
//! so `list_all` ordering is stable within a session. A payload that fails to
//! decode is surfaced as [`StoreError::Corrupt`], never silently reset.

use emoji_host::{
    next_monotonic_timestamp_ms, record_matches_query, sort_newest_first, EmojiRecord,
    EmojiTableFuture, EmojiTableStore, StoreError,
};

/// localStorage key holding the serialized emoji table.
pub const COLLECTION_STORAGE_KEY: &str = "emoji_paste.collection.v1";

/// Browser emoji table backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebEmojiTableStore;

impl WebEmojiTableStore {
    fn load_table(self) -> Result<Vec<EmojiRecord>, StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| StoreError::Unavailable("localStorage unavailable".to_string()))?;
            let raw = storage
                .get_item(COLLECTION_STORAGE_KEY)
                .map_err(|e| StoreError::Unavailable(format!("localStorage get_item: {e:?}")))?;
            match raw {
                None => Ok(Vec::new()),
                Some(raw) => {
                    serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(Vec::new())
        }
    }

    fn save_table(self, records: &[EmojiRecord]) -> Result<(), StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            let raw = serde_json::to_string(records)
                .map_err(|e| StoreError::Rejected(e.to_string()))?;
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| StoreError::Unavailable("localStorage unavailable".to_string()))?;
            storage
                .set_item(COLLECTION_STORAGE_KEY, &raw)
                .map_err(|e| StoreError::Rejected(format!("localStorage set_item: {e:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = records;
            Ok(())
        }
    }
}

impl EmojiTableStore for WebEmojiTableStore {
    fn list_all<'a>(&'a self) -> EmojiTableFuture<'a, Result<Vec<EmojiRecord>, StoreError>> {
        let store = *self;
        Box::pin(async move {
            let mut records = store.load_table()?;
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
        let store = *self;
        Box::pin(async move {
            let mut records = store.load_table()?;
            let now = next_monotonic_timestamp_ms();
            let record = EmojiRecord {
                id: now.to_string(),
                emoji: emoji.to_string(),
                description: description.map(str::to_string),
                tags: tags.to_vec(),
                created_at_unix_ms: Some(now),
                updated_at_unix_ms: Some(now),
            };
            records.push(record.clone());
            store.save_table(&records)?;
            Ok(record)
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> EmojiTableFuture<'a, Result<(), StoreError>> {
        let store = *self;
        Box::pin(async move {
            let mut records = store.load_table()?;
            records.retain(|record| record.id != id);
            store.save_table(&records)
        })
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> EmojiTableFuture<'a, Result<Vec<EmojiRecord>, StoreError>> {
        let store = *self;
        Box::pin(async move {
            let mut records = store.load_table()?;
            records.retain(|record| record_matches_query(record, query));
            sort_newest_first(&mut records);
            Ok(records)
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    // On host targets the adapter is an inert stub: reads see an empty table
    // and writes succeed without persisting.
    #[test]
    fn non_wasm_stub_reads_empty_and_accepts_writes() {
        let store = WebEmojiTableStore;
        let store_obj: &dyn EmojiTableStore = &store;

        assert!(block_on(store_obj.list_all()).expect("list").is_empty());
        let created =
            block_on(store_obj.create("✨", Some("Sparkles"), &[])).expect("create");
        assert_eq!(created.emoji, "✨");
        assert!(created.created_at_unix_ms.is_some());
        block_on(store_obj.delete(&created.id)).expect("delete");
        assert!(block_on(store_obj.search("sparkles")).expect("search").is_empty());
    }
}
