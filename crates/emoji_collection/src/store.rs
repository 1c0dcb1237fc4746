//! Authoritative in-memory collection and its mutation/view operations.

use std::{cell::RefCell, rc::Rc};

use emoji_host::{EmojiRecord, EmojiTableStore, StoreError, ToastService};
use thiserror::Error;

use crate::filter::{normalize_tags, record_matches_filter, tag_universe};
use crate::seed::seed_starter_set;

/// Failures surfaced by [`CollectionStore`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Caller-supplied input failed a precondition; reported before any
    /// store interaction and never retried.
    #[error("invalid input: {0}")]
    Validation(String),
    /// The backing table rejected or could not complete an operation; the
    /// in-memory collection is left at its last-known-good state.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Single authoritative owner of the emoji records known to this session.
///
/// Constructed once per session, [`load`](Self::load)ed once, then driven
/// only through its public operations. The backing table is authoritative:
/// memory changes only after a store operation confirms success. Every
/// failed operation pushes exactly one toast through the injected
/// [`ToastService`].
pub struct CollectionStore {
    table: Rc<dyn EmojiTableStore>,
    toasts: Rc<dyn ToastService>,
    records: RefCell<Vec<EmojiRecord>>,
}

impl CollectionStore {
    /// Creates an empty store over `table`, surfacing failures via `toasts`.
    pub fn new(table: Rc<dyn EmojiTableStore>, toasts: Rc<dyn ToastService>) -> Self {
        Self {
            table,
            toasts,
            records: RefCell::new(Vec::new()),
        }
    }

    /// Fetches all records from the table, newest-created-first, and adopts
    /// them as the in-memory collection.
    ///
    /// When the table reports zero records, the starter set is seeded and
    /// adopted instead. A fetch failure leaves the collection empty; a
    /// partial seeding failure keeps whatever subset was created. Single
    /// attempt, no retry.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Store`] when the fetch or seeding fails.
    pub async fn load(&self) -> Result<(), CollectionError> {
        let fetched = match self.table.list_all().await {
            Ok(fetched) => fetched,
            Err(err) => {
                self.toasts.error("Failed to load emojis");
                return Err(err.into());
            }
        };

        if !fetched.is_empty() {
            *self.records.borrow_mut() = fetched;
            return Ok(());
        }

        let outcome = seed_starter_set(self.table.as_ref()).await;
        *self.records.borrow_mut() = outcome.created;
        match outcome.error {
            Some(err) => {
                self.toasts.error("Failed to load default emojis");
                Err(err.into())
            }
            None => {
                self.toasts.success("Loaded default emoji collection");
                Ok(())
            }
        }
    }

    /// Creates a record from user input and prepends it to the collection so
    /// it appears first in unfiltered views.
    ///
    /// The glyph is trimmed and must be non-empty; tags are normalized
    /// (trimmed, lowercased, deduplicated) and an empty description is
    /// treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Validation`] for an empty glyph before any
    /// store interaction, or [`CollectionError::Store`] when the create is
    /// rejected; memory is unchanged in both cases.
    pub async fn add(
        &self,
        emoji: &str,
        description: Option<&str>,
        tags: Vec<String>,
    ) -> Result<EmojiRecord, CollectionError> {
        let emoji = emoji.trim();
        if emoji.is_empty() {
            self.toasts.error("Please enter an emoji or emoticon");
            return Err(CollectionError::Validation(
                "emoji must not be empty".to_string(),
            ));
        }

        let tags = normalize_tags(tags);
        let description = description.map(str::trim).filter(|d| !d.is_empty());

        match self.table.create(emoji, description, &tags).await {
            Ok(record) => {
                self.records.borrow_mut().insert(0, record.clone());
                Ok(record)
            }
            Err(err) => {
                self.toasts.error("Failed to add emoji");
                Err(err.into())
            }
        }
    }

    /// Deletes `id` from the table, then drops the matching record from
    /// memory.
    ///
    /// Removing an id that is not in memory is a collection-level no-op, but
    /// the delete is still issued and its failure still surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Store`] when the delete is rejected;
    /// memory is unchanged in that case.
    pub async fn remove(&self, id: &str) -> Result<(), CollectionError> {
        if let Err(err) = self.table.delete(id).await {
            self.toasts.error("Failed to remove emoji");
            return Err(err.into());
        }
        self.records.borrow_mut().retain(|record| record.id != id);
        self.toasts.success("Emoji removed");
        Ok(())
    }

    /// Snapshot of the current collection in authoritative order.
    pub fn records(&self) -> Vec<EmojiRecord> {
        self.records.borrow().clone()
    }

    /// Number of records currently in memory.
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Returns true when no records are in memory.
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Pure derived view: records matching both the search term and the tag
    /// selection (see [`record_matches_filter`]), in collection order.
    pub fn filtered_view(&self, search_term: &str, selected_tags: &[String]) -> Vec<EmojiRecord> {
        self.records
            .borrow()
            .iter()
            .filter(|record| record_matches_filter(record, search_term, selected_tags))
            .cloned()
            .collect()
    }

    /// Pure derived view: every tag on any record, deduplicated and sorted.
    pub fn tag_universe(&self) -> Vec<String> {
        tag_universe(&self.records.borrow())
    }
}
