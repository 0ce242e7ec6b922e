//! Modal preview of one document with its comment thread.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the library page while a document is selected. Each time the
//! selected document changes the overlay resolves its public URL and
//! re-fetches the full comment list; results for a document that is no
//! longer shown are dropped by `PreviewState`'s generation check.

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::net::api::SupabaseClient;
use crate::net::backend::DocumentBackend;
use crate::net::types::Document;
use crate::state::preview::{PreviewState, validate_comment};
use crate::state::toasts::{ToastKind, ToastState};
use crate::util::format::short_date;

/// Overlay with inline preview, download action, and comments.
#[component]
pub fn DocumentPreview(#[prop(into)] document: Signal<Option<Document>>, on_close: Callback<()>) -> impl IntoView {
    let backend = expect_context::<SupabaseClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let preview = RwSignal::new(PreviewState::default());

    let backend_open = backend.clone();
    Effect::new(move || {
        let Some(doc) = document.get() else {
            preview.update(PreviewState::close);
            return;
        };
        if preview.with_untracked(PreviewState::document_id) == Some(doc.id) {
            return;
        }
        let Some(ticket) = preview.try_update(|p| p.open(doc.clone())) else {
            return;
        };
        let url = backend_open.public_url(&doc.file_path);
        preview.update(|p| {
            p.apply_url(ticket, url);
        });

        #[cfg(feature = "hydrate")]
        {
            let backend = backend_open.clone();
            let document_id = doc.id;
            leptos::task::spawn_local(async move {
                match crate::state::preview::load_comments(&backend, document_id).await {
                    Ok(comments) => {
                        preview.try_update(|p| p.apply_comments(ticket, comments));
                    }
                    Err(e) => leptos::logging::warn!("comment load failed: document_id={document_id} error={e}"),
                }
            });
        }
    });

    on_cleanup(move || {
        preview.try_update(PreviewState::close);
    });

    let submit = Callback::new(move |()| {
        let snapshot = preview.get_untracked();
        let Some(document_id) = snapshot.document_id() else {
            return;
        };
        if let Err(e) = validate_comment(&snapshot.author_name, &snapshot.draft) {
            notify(toasts, ToastKind::Error, e.message());
            return;
        }
        let Some(ticket) = preview.try_update(PreviewState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::preview::post_comment(
                    &backend,
                    document_id,
                    &snapshot.author_name,
                    &snapshot.draft,
                )
                .await;
                if let Err(e) = &result {
                    leptos::logging::error!("comment insert failed: document_id={document_id} error={e}");
                    notify(toasts, ToastKind::Error, e.message());
                }
                preview.try_update(|p| p.finish_submit(ticket, &result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&backend, document_id, ticket);
        }
    });

    let on_download = move |_| {
        if let Some(url) = preview.get_untracked().url {
            crate::util::browser::open_in_new_tab(&url);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let title = move || preview.get().document.map(|d| d.name).unwrap_or_default();
    let busy = move || preview.get().submitting;

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--preview"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <header class="preview__header">
                    <h2 class="preview__title">{title}</h2>
                    <button
                        class="icon-btn"
                        title="Download document"
                        aria-label="Download document"
                        on:click=on_download
                    >
                        "⤓"
                    </button>
                    <span class="preview__spacer"></span>
                    <button
                        class="icon-btn preview__close"
                        title="Close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </header>

                <div class="preview__body">
                    <div class="preview__frame">
                        {move || {
                            let state = preview.get();
                            match (state.url, state.document) {
                                (Some(url), Some(doc)) if doc.is_image() => {
                                    view! { <img class="preview__image" src=url alt=doc.name/> }.into_any()
                                }
                                (Some(url), Some(_)) => {
                                    view! { <iframe class="preview__iframe" src=url title="Document preview"></iframe> }
                                        .into_any()
                                }
                                _ => view! { <p class="preview__loading">"Loading preview..."</p> }.into_any(),
                            }
                        }}
                    </div>

                    <aside class="preview__comments">
                        <h3>"Comments"</h3>
                        <label class="dialog__label">
                            "Your Name"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="Enter your name"
                                prop:value=move || preview.get().author_name
                                on:input=move |ev| preview.update(|p| p.author_name = event_target_value(&ev))
                                disabled=busy
                            />
                        </label>
                        <label class="dialog__label">
                            "Comment"
                            <textarea
                                class="dialog__input"
                                rows="3"
                                placeholder="Add a comment..."
                                prop:value=move || preview.get().draft
                                on:input=move |ev| preview.update(|p| p.draft = event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
                                        ev.prevent_default();
                                        submit.run(());
                                    }
                                }
                                disabled=busy
                            ></textarea>
                        </label>
                        <button
                            class="btn btn--primary"
                            class:btn--ready=move || preview.get().can_submit()
                            on:click=move |_| submit.run(())
                            disabled=busy
                        >
                            {move || preview.get().submit_label()}
                        </button>

                        <ul class="preview__thread">
                            {move || {
                                preview
                                    .get()
                                    .comments
                                    .into_iter()
                                    .map(|c| {
                                        view! {
                                            <li class="comment">
                                                <p class="comment__content">{c.content}</p>
                                                <div class="comment__meta">
                                                    <span class="comment__author">{c.author_name}</span>
                                                    <span class="comment__date">{short_date(c.created_at)}</span>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </aside>
                </div>
            </div>
        </div>
    }
}
