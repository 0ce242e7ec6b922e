//! Library page: the single screen of the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the list query lifecycle and wires the upload panel, listing, and
//! preview overlay to the shared `DocumentsState` and `UiState` contexts.
//! Children only report intent (uploaded, selected, closed) upward.

use leptos::prelude::*;

use crate::components::document_list::DocumentList;
use crate::components::document_preview::DocumentPreview;
use crate::components::upload_panel::UploadPanel;
use crate::net::api::SupabaseClient;
use crate::net::types::Document;
use crate::state::documents::DocumentsState;
use crate::state::toasts::ToastState;
use crate::state::ui::{UiState, ViewMode};

#[component]
pub fn LibraryPage() -> impl IntoView {
    let backend = expect_context::<SupabaseClient>();
    let documents = expect_context::<RwSignal<DocumentsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let reload = Callback::new(move |()| {
        let Some(ticket) = documents.try_update(DocumentsState::begin_load) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::backend::DocumentBackend;
            use crate::state::documents::{LOAD_FAILED_MESSAGE, fetch_documents};

            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                let result = fetch_documents(&backend).await;
                let failed = result.is_err();
                if let Err(e) = &result {
                    leptos::logging::error!("document list failed: {e}");
                }
                let applied = documents
                    .try_update(|d| d.finish_load(ticket, result, |path| backend.public_url(path)))
                    .unwrap_or(false);
                if applied && failed {
                    crate::components::toaster::notify(
                        toasts,
                        crate::state::toasts::ToastKind::Error,
                        LOAD_FAILED_MESSAGE,
                    );
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&backend, toasts, ticket);
        }
    });

    // Initial list query; effects only run in the browser.
    Effect::new(move || reload.run(()));

    let selected = Memo::new(move |_| ui.with(|u| u.selected.clone()));
    let view_mode = Signal::derive(move || ui.with(|u| u.view_mode));
    let set_mode = move |mode: ViewMode| ui.update(|u| u.view_mode = mode);
    let on_select = Callback::new(move |doc: Document| ui.update(|u| u.select(doc)));
    let on_close = Callback::new(move |()| ui.update(UiState::clear_selection));

    view! {
        <div class="library-page">
            <header class="library-page__header">
                <h1>"Documents"</h1>
            </header>

            <UploadPanel on_uploaded=reload/>

            <section class="library-page__listing">
                <div class="library-page__toolbar">
                    <h2>"Your Documents"</h2>
                    <Show when=move || documents.get().loading>
                        <span class="library-page__loading">"Loading..."</span>
                    </Show>
                    <div class="view-toggle" role="group" aria-label="Layout">
                        <button
                            class="view-toggle__btn"
                            class:view-toggle__btn--active=move || view_mode.get() == ViewMode::Grid
                            aria-pressed=move || (view_mode.get() == ViewMode::Grid).to_string()
                            title="Grid view"
                            on:click=move |_| set_mode(ViewMode::Grid)
                        >
                            "▦"
                        </button>
                        <button
                            class="view-toggle__btn"
                            class:view-toggle__btn--active=move || view_mode.get() == ViewMode::List
                            aria-pressed=move || (view_mode.get() == ViewMode::List).to_string()
                            title="List view"
                            on:click=move |_| set_mode(ViewMode::List)
                        >
                            "☰"
                        </button>
                    </div>
                </div>
                <DocumentList documents=documents view_mode=view_mode on_select=on_select/>
            </section>

            <Show when=move || selected.get().is_some()>
                <DocumentPreview document=selected on_close=on_close/>
            </Show>
        </div>
    }
}
