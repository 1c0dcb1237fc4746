//! Shared Leptos UI components for the emoji collection page.
//!
//! Presentation only: every component renders from props and reports intents
//! through `Callback`s; collection state lives with the caller. Components
//! carry `data-ui-*` attributes as stable styling hooks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
mod toast_stack;

pub use components::{AddEmojiDialog, AddEmojiRequest, EmojiCard, EmptyState, SearchBar, TagChip};
pub use toast_stack::{Toast, ToastSignalService, ToastStack};
