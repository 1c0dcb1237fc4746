//! Client-side collection state manager for the emoji app.
//!
//! [`CollectionStore`] is the single authoritative owner of the emoji records
//! known to a session. It mediates every read and write against the backing
//! [`emoji_host::EmojiTableStore`], seeds a starter set when the table is
//! empty at startup, and exposes pure derived views (filtered list, tag
//! universe) that the presentation layer renders from.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod filter;
pub mod seed;
pub mod store;

pub use filter::{normalize_tags, record_matches_filter, tag_universe};
pub use seed::{seed_starter_set, SeedOutcome, StarterEmoji, STARTER_EMOJIS};
pub use store::{CollectionError, CollectionStore};
