//! Browser (`wasm32`) implementations of the `emoji_host` service contracts.
//!
//! The app ships as a static site with no server, so the authoritative emoji
//! table lives in the browser: [`WebEmojiTableStore`] persists the whole
//! table as one JSON array under a fixed `localStorage` key. Non-wasm builds
//! compile to inert stubs so the workspace checks and tests on host targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod store;

pub use clipboard::copy_text;
pub use store::{WebEmojiTableStore, COLLECTION_STORAGE_KEY};
