//! Card, chip, search, dialog, and empty-state components.

use emoji_host::EmojiRecord;
use leptos::ev::MouseEvent;
use leptos::*;

/// User intent captured by [`AddEmojiDialog`]: a new record to create.
///
/// Fields are raw dialog input; tag normalization belongs to the collection
/// core, not the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEmojiRequest {
    /// The glyph or emoticon text, trimmed, non-empty.
    pub emoji: String,
    /// Optional label, trimmed; `None` when left blank.
    pub description: Option<String>,
    /// Comma-separated tag input split into raw entries.
    pub tags: Vec<String>,
}

#[component]
/// Selectable tag chip used in the filter row and on cards.
pub fn TagChip(
    /// The tag text.
    tag: String,
    /// Whether this chip is part of the active filter selection.
    #[prop(optional, into)]
    selected: MaybeSignal<bool>,
    /// Toggle intent; receives the tag text. Chips without a callback render
    /// as static labels.
    #[prop(optional)]
    on_toggle: Option<Callback<String>>,
) -> impl IntoView {
    let label = tag.clone();
    match on_toggle {
        Some(on_toggle) => {
            let toggle_tag = tag.clone();
            view! {
                <button
                    type="button"
                    class="tag-chip"
                    data-ui-kind="tag-chip"
                    data-ui-selected=move || if selected.get() { "true" } else { "false" }
                    aria-pressed=move || selected.get()
                    on:click=move |_| on_toggle.call(toggle_tag.clone())
                >
                    {label}
                </button>
            }
            .into_view()
        }
        None => view! {
            <span class="tag-chip" data-ui-kind="tag-chip" data-ui-selected="false">
                {label}
            </span>
        }
        .into_view(),
    }
}

#[component]
/// Search input for the collection page.
pub fn SearchBar(
    /// Current search term.
    #[prop(into)]
    value: MaybeSignal<String>,
    /// Receives the full input value on every keystroke.
    on_input: Callback<String>,
    /// Placeholder text.
    #[prop(optional)]
    placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-bar"
            data-ui-kind="search-bar"
            placeholder=placeholder.unwrap_or("Search emojis")
            aria-label="Search emojis"
            autocomplete="off"
            spellcheck="false"
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

#[component]
/// One emoji card: glyph, optional description, optional tag chips, with
/// copy and remove intents.
pub fn EmojiCard(
    /// The record to render.
    record: EmojiRecord,
    /// Whether tag chips are shown on the card.
    #[prop(optional, into)]
    show_tags: MaybeSignal<bool>,
    /// Copy intent; receives the glyph text. Fired by clicking the card body
    /// or the copy button.
    on_copy: Callback<String>,
    /// Remove intent; receives the record id.
    on_remove: Callback<String>,
) -> impl IntoView {
    let glyph = record.emoji.clone();
    let glyph_for_button = record.emoji.clone();
    let id = record.id.clone();
    let description = record.description.clone();
    let tags = record.tags.clone();
    let tags_for_when = record.tags.clone();

    view! {
        <div
            class="emoji-card"
            data-ui-kind="emoji-card"
            role="button"
            tabindex=0
            title="Copy to clipboard"
            on:click=move |_| on_copy.call(glyph.clone())
        >
            <div class="emoji-card-glyph">{record.emoji.clone()}</div>
            {description.map(|description| {
                view! { <p class="emoji-card-description">{description}</p> }
            })}
            <Show when=move || show_tags.get() && !tags_for_when.is_empty() fallback=|| ()>
                {
                    let tags = tags.clone();
                    view! {
                        <div class="emoji-card-tags">
                            <For each=move || tags.clone() key=|tag| tag.clone() let:tag>
                                <TagChip tag />
                            </For>
                        </div>
                    }
                }
            </Show>
            <div class="emoji-card-actions">
                <button
                    type="button"
                    class="emoji-card-action"
                    aria-label="Copy emoji"
                    title="Copy emoji"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        on_copy.call(glyph_for_button.clone());
                    }
                >
                    "⧉"
                </button>
                <button
                    type="button"
                    class="emoji-card-action"
                    data-ui-variant="danger"
                    aria-label="Remove emoji"
                    title="Remove emoji"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        on_remove.call(id.clone());
                    }
                >
                    "✕"
                </button>
            </div>
        </div>
    }
}

#[component]
/// Modal dialog for adding a new emoji to the collection.
///
/// The dialog owns its own field state; on submit it reports an
/// [`AddEmojiRequest`] and resets. Submission stays disabled until the emoji
/// field is non-empty, so the collection core's validation is a backstop
/// rather than the primary gate.
pub fn AddEmojiDialog(
    /// Receives the dialog contents when the user submits.
    on_add: Callback<AddEmojiRequest>,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let emoji = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let tags_text = create_rw_signal(String::new());

    let submittable = move || !emoji.get().trim().is_empty();

    let submit = move || {
        let glyph = emoji.get().trim().to_string();
        if glyph.is_empty() {
            return;
        }
        let label = description.get().trim().to_string();
        let request = AddEmojiRequest {
            emoji: glyph,
            description: (!label.is_empty()).then_some(label),
            tags: tags_text
                .get()
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        };
        on_add.call(request);
        emoji.set(String::new());
        description.set(String::new());
        tags_text.set(String::new());
        open.set(false);
    };

    view! {
        <button
            type="button"
            class="add-emoji-trigger"
            data-ui-kind="button"
            data-ui-variant="primary"
            on:click=move |_| open.set(true)
        >
            "+ Add New"
        </button>
        <Show when=move || open.get() fallback=|| ()>
            <div class="dialog-backdrop" data-ui-kind="dialog-backdrop">
                <div
                    class="dialog"
                    data-ui-kind="dialog"
                    role="dialog"
                    aria-modal="true"
                    aria-label="Add new emoji"
                >
                    <h2 class="dialog-title">"Add New Emoji"</h2>
                    <p class="dialog-description">
                        "Add a new emoji or emoticon to your collection for easy copying."
                    </p>
                    <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }>
                        <label class="dialog-label" for="add-emoji-glyph">
                            "Emoji / Emoticon"
                        </label>
                        <input
                            id="add-emoji-glyph"
                            class="dialog-field dialog-field-glyph"
                            placeholder="😀 or :)"
                            autocomplete="off"
                            prop:value=move || emoji.get()
                            on:input=move |ev| emoji.set(event_target_value(&ev))
                        />
                        <label class="dialog-label" for="add-emoji-description">
                            "Description"
                        </label>
                        <input
                            id="add-emoji-description"
                            class="dialog-field"
                            placeholder="Happy face"
                            autocomplete="off"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                        <label class="dialog-label" for="add-emoji-tags">
                            "Tags (comma separated)"
                        </label>
                        <input
                            id="add-emoji-tags"
                            class="dialog-field"
                            placeholder="cute, fun"
                            autocomplete="off"
                            prop:value=move || tags_text.get()
                            on:input=move |ev| tags_text.set(event_target_value(&ev))
                        />
                        <div class="dialog-actions">
                            <button
                                type="button"
                                class="dialog-cancel"
                                on:click=move |_| open.set(false)
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="dialog-submit"
                                data-ui-variant="primary"
                                disabled=move || !submittable()
                            >
                                "Add Emoji"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
/// Centered placeholder for an empty grid.
pub fn EmptyState(
    /// Large decorative glyph.
    icon: &'static str,
    /// Heading text.
    title: &'static str,
    /// Supporting message.
    message: &'static str,
    /// Optional call-to-action content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state" data-ui-kind="empty-state">
            <div class="empty-state-icon">{icon}</div>
            <h3 class="empty-state-title">{title}</h3>
            <p class="empty-state-message">{message}</p>
            {children.map(|children| children())}
        </div>
    }
}
