//! Document listing in grid or list layout.
//!
//! DESIGN
//! ======
//! Pure rendering over the collection owned by the library page; this module
//! never queries rows. Both layouts draw from the same `entries` output, so
//! switching layout cannot reorder or filter documents.

#[cfg(test)]
#[path = "document_list_test.rs"]
mod document_list_test;

use leptos::prelude::*;

use crate::net::api::SupabaseClient;
use crate::net::backend::DocumentBackend;
use crate::net::types::Document;
use crate::state::documents::DocumentsState;
use crate::state::ui::ViewMode;
use crate::util::format::short_date;

/// One rendered listing item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentEntry {
    pub document: Document,
    pub date_label: String,
    /// Cached public URL for image documents.
    pub thumbnail: Option<String>,
}

/// Listing items in collection order.
pub fn entries(state: &DocumentsState) -> Vec<DocumentEntry> {
    state
        .items
        .iter()
        .map(|doc| DocumentEntry {
            document: doc.clone(),
            date_label: short_date(doc.created_at),
            thumbnail: state.thumbnail(doc.id).map(str::to_owned),
        })
        .collect()
}

/// Grid or list of documents, with an empty-state placeholder.
#[component]
pub fn DocumentList(
    documents: RwSignal<DocumentsState>,
    #[prop(into)] view_mode: Signal<ViewMode>,
    on_select: Callback<Document>,
) -> impl IntoView {
    let backend = expect_context::<SupabaseClient>();
    let on_download = Callback::new(move |path: String| {
        crate::util::browser::open_in_new_tab(&backend.public_url(&path));
    });

    view! {
        <Show when=move || !documents.get().is_empty() fallback=|| view! { <EmptyListing/> }>
            <div class=move || format!("document-list {}", view_mode.get().css_class())>
                {move || {
                    let mode = view_mode.get();
                    entries(&documents.get())
                        .into_iter()
                        .map(|entry| match mode {
                            ViewMode::Grid => {
                                view! { <DocumentCard entry=entry on_select=on_select on_download=on_download/> }
                                    .into_any()
                            }
                            ViewMode::List => {
                                view! { <DocumentRow entry=entry on_select=on_select on_download=on_download/> }
                                    .into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}

#[component]
fn EmptyListing() -> impl IntoView {
    view! {
        <div class="document-list__empty">
            <span class="document-list__glyph" aria-hidden="true">"🗎"</span>
            <h3>"No documents yet"</h3>
            <p>"Upload your first document to get started."</p>
        </div>
    }
}

/// Thumbnail-first card for grid layout.
#[component]
fn DocumentCard(entry: DocumentEntry, on_select: Callback<Document>, on_download: Callback<String>) -> impl IntoView {
    let DocumentEntry { document, date_label, thumbnail } = entry;
    let name = document.name.clone();
    let alt = name.clone();
    let path = document.file_path.clone();

    view! {
        <div class="document-card" on:click=move |_| on_select.run(document.clone())>
            <div class="document-card__thumb">
                {match thumbnail {
                    Some(src) => view! { <img class="document-card__image" src=src alt=alt/> }.into_any(),
                    None => view! { <span class="document-card__glyph" aria-hidden="true">"🗎"</span> }.into_any(),
                }}
            </div>
            <div class="document-card__meta">
                <div>
                    <h3 class="document-card__name">{name}</h3>
                    <p class="document-card__date">{date_label}</p>
                </div>
                <DownloadButton path=path on_download=on_download/>
            </div>
        </div>
    }
}

/// Single-line row for list layout.
#[component]
fn DocumentRow(entry: DocumentEntry, on_select: Callback<Document>, on_download: Callback<String>) -> impl IntoView {
    let DocumentEntry { document, date_label, .. } = entry;
    let name = document.name.clone();
    let path = document.file_path.clone();

    view! {
        <div class="document-row" on:click=move |_| on_select.run(document.clone())>
            <span class="document-row__glyph" aria-hidden="true">"🗎"</span>
            <div class="document-row__text">
                <h3 class="document-row__name">{name}</h3>
                <p class="document-row__date">{date_label}</p>
            </div>
            <DownloadButton path=path on_download=on_download/>
        </div>
    }
}

/// Opens the document in a new tab without selecting it.
#[component]
fn DownloadButton(path: String, on_download: Callback<String>) -> impl IntoView {
    view! {
        <button
            class="icon-btn document-list__download"
            title="Download document"
            aria-label="Download document"
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.stop_propagation();
                on_download.run(path.clone());
            }
        >
            "⤓"
        </button>
    }
}
