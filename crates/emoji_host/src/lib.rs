//! Typed host contracts and shared models for the emoji collection app.
//!
//! This crate is the API-first boundary between the collection core and its
//! environment. It owns the [`EmojiRecord`] entity, the [`EmojiTableStore`]
//! CRUD contract satisfied by concrete persistence adapters (browser-local in
//! `emoji_host_web`), the [`ToastService`] notification seam, and time
//! helpers. In-memory and no-op adapters live here so core logic tests run on
//! host targets without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod record;
pub mod store;
pub mod time;
pub mod toast;

pub use record::EmojiRecord;
pub use store::{
    record_matches_query, sort_newest_first, EmojiTableFuture, EmojiTableStore,
    MemoryEmojiTableStore, StoreError,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
pub use toast::{MemoryToastService, NoopToastService, ToastService, ToastTone};
