//! The single collection page: state wiring and layout.

use std::rc::Rc;

use emoji_collection::CollectionStore;
use emoji_host::ToastService;
use emoji_host_web::{copy_text, WebEmojiTableStore};
use emoji_ui::{
    AddEmojiDialog, AddEmojiRequest, EmojiCard, EmptyState, SearchBar, TagChip, Toast,
    ToastSignalService, ToastStack,
};
use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};

#[component]
/// The emoji collection page.
///
/// Owns one [`CollectionStore`] for the session, loads it once on mount, and
/// renders every view from the store's derivations. Page-level signals cover
/// the search term, the tag selection, tag visibility on cards, and the
/// initial loading flag; a revision counter ties store mutations into the
/// reactive graph.
pub fn EmojiApp() -> impl IntoView {
    provide_meta_context();

    let toasts = create_rw_signal(Vec::<Toast>::new());
    let toast_service = ToastSignalService::new(toasts);
    let store = Rc::new(CollectionStore::new(
        Rc::new(WebEmojiTableStore),
        Rc::new(toast_service),
    ));

    let search_term = create_rw_signal(String::new());
    let selected_tags = create_rw_signal(Vec::<String>::new());
    let show_tags = create_rw_signal(false);
    let loading = create_rw_signal(true);
    let revision = create_rw_signal(0u32);

    {
        let store = store.clone();
        spawn_local(async move {
            if let Err(err) = store.load().await {
                logging::warn!("initial collection load failed: {err}");
            }
            revision.update(|n| *n = n.wrapping_add(1));
            loading.set(false);
        });
    }

    let store_for_filter = store.clone();
    let filtered = Signal::derive(move || {
        let _ = revision.get();
        store_for_filter.filtered_view(&search_term.get(), &selected_tags.get())
    });
    let store_for_tags = store.clone();
    let all_tags = Signal::derive(move || {
        let _ = revision.get();
        store_for_tags.tag_universe()
    });
    let store_for_total = store.clone();
    let total_count = Signal::derive(move || {
        let _ = revision.get();
        store_for_total.len()
    });

    let on_search = Callback::new(move |term: String| search_term.set(term));

    let store_for_add = store.clone();
    let on_add = Callback::new(move |request: AddEmojiRequest| {
        let store = store_for_add.clone();
        spawn_local(async move {
            if let Err(err) = store
                .add(&request.emoji, request.description.as_deref(), request.tags)
                .await
            {
                logging::warn!("add emoji failed: {err}");
            }
            revision.update(|n| *n = n.wrapping_add(1));
        });
    });

    let store_for_remove = store.clone();
    let on_remove = Callback::new(move |id: String| {
        let store = store_for_remove.clone();
        spawn_local(async move {
            if let Err(err) = store.remove(&id).await {
                logging::warn!("remove emoji failed: {err}");
            }
            revision.update(|n| *n = n.wrapping_add(1));
        });
    });

    let on_copy = Callback::new(move |glyph: String| {
        spawn_local(async move {
            match copy_text(&glyph).await {
                Ok(()) => toast_service.success(&format!("Copied {glyph} to clipboard!")),
                Err(err) => {
                    logging::warn!("clipboard copy failed: {err}");
                    toast_service.error("Failed to copy to clipboard");
                }
            }
        });
    });

    let on_toggle_tag = Callback::new(move |tag: String| {
        selected_tags.update(|tags| {
            if let Some(position) = tags.iter().position(|t| t == &tag) {
                tags.remove(position);
            } else {
                tags.push(tag.clone());
            }
        });
    });

    view! {
        <Title text="emojis copynpaste" />
        <Meta name="description" content="collect all the emoji vibes and copy with one tap" />

        <div class="page">
            <Show when=move || loading.get() fallback=|| ()>
                <div class="loading-screen">
                    <div class="loading-glyph">"✨"</div>
                    <p class="loading-text">"Loading your emoji collection..."</p>
                </div>
            </Show>

            <Show when=move || !loading.get() fallback=|| ()>
                <div class="page-content">
                    <header class="page-header">
                        <h1 class="page-title">"emojis copynpaste"</h1>
                        <p class="page-tagline">
                            "collect all the emoji vibes and copy with one tap"
                        </p>
                    </header>

                    <div class="page-controls">
                        <SearchBar
                            value=search_term
                            on_input=on_search
                            placeholder="Search emojis"
                        />
                        <button
                            type="button"
                            class="tags-toggle"
                            data-ui-kind="button"
                            on:click=move |_| show_tags.update(|visible| *visible = !*visible)
                        >
                            {move || if show_tags.get() { "Hide Tags" } else { "Show Tags" }}
                        </button>
                        <AddEmojiDialog on_add />
                    </div>

                    <Show when=move || !all_tags.get().is_empty() fallback=|| ()>
                        <div class="tag-filter-row" role="group" aria-label="Filter by tag">
                            <For each=move || all_tags.get() key=|tag| tag.clone() let:tag>
                                {
                                    let chip_tag = tag.clone();
                                    let selected = Signal::derive(move || {
                                        selected_tags.get().iter().any(|t| t == &chip_tag)
                                    });
                                    view! { <TagChip tag selected on_toggle=on_toggle_tag /> }
                                }
                            </For>
                        </div>
                    </Show>

                    <p class="page-stats">
                        {move || {
                            let shown = filtered.get().len();
                            let total = total_count.get();
                            let qualifier = if search_term.get().is_empty() {
                                ""
                            } else {
                                " matching your search"
                            };
                            format!("{shown} of {total} emojis{qualifier}")
                        }}
                    </p>

                    <Show
                        when=move || !filtered.get().is_empty()
                        fallback=move || {
                            let searching = !search_term.get().is_empty()
                                || !selected_tags.get().is_empty();
                            view! {
                                <EmptyState
                                    icon=if searching { "🔍" } else { "✨" }
                                    title=if searching { "No emojis found" } else { "No emojis yet" }
                                    message=if searching {
                                        "Try a different search term or browse by tags"
                                    } else {
                                        "Add your first emoji to get started"
                                    }
                                />
                            }
                        }
                    >
                        <div class="emoji-grid">
                            <For
                                each=move || filtered.get()
                                key=|record| record.id.clone()
                                let:record
                            >
                                <EmojiCard record show_tags on_copy on_remove />
                            </For>
                        </div>
                    </Show>

                    <footer class="page-footer">
                        <p>"made with 🤍 for emoji lovers"</p>
                    </footer>
                </div>
            </Show>

            <ToastStack toasts />
        </div>
    }
}
