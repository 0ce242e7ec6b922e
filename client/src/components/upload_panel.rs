//! Upload panel: document name field plus file picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Choosing a file is the submit action. The panel validates the name, reads
//! the file, runs `state::upload::upload_document`, and reports completion to
//! the library page through `on_uploaded` so it can re-run the list query.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toaster::notify;
use crate::net::api::SupabaseClient;
#[cfg(feature = "hydrate")]
use crate::state::toasts::ToastKind;
use crate::state::toasts::ToastState;
use crate::state::upload::{ACCEPT_HINT, UploadState};
#[cfg(feature = "hydrate")]
use crate::state::upload::{UPLOAD_SUCCESS_MESSAGE, UploadError, upload_document, validate_name};

/// Name input and file drop zone.
#[component]
pub fn UploadPanel(on_uploaded: Callback<()>) -> impl IntoView {
    let backend = expect_context::<SupabaseClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(UploadState::default());

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::browser::selected_file(&ev) else {
                return;
            };
            crate::util::browser::reset_file_input(&ev);
            if form.get_untracked().uploading {
                return;
            }
            let name = match validate_name(&form.get_untracked().name) {
                Ok(name) => name,
                Err(e) => {
                    notify(toasts, ToastKind::Error, e.message());
                    return;
                }
            };

            form.update(|f| f.uploading = true);
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                let result = match crate::util::browser::read_picked_file(&file).await {
                    Ok(picked) => upload_document(&backend, &name, &picked).await,
                    Err(e) => Err(UploadError::Read(e)),
                };
                match result {
                    Ok(row) => {
                        leptos::logging::log!("uploaded document name={} path={}", row.name, row.file_path);
                        notify(toasts, ToastKind::Success, UPLOAD_SUCCESS_MESSAGE);
                        form.try_update(|f| f.name.clear());
                        on_uploaded.run(());
                    }
                    Err(e) => {
                        leptos::logging::error!("upload failed: {e}");
                        notify(toasts, ToastKind::Error, e.message());
                    }
                }
                form.try_update(|f| f.uploading = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &backend, toasts, on_uploaded);
        }
    };

    view! {
        <section class="upload-panel">
            <label class="upload-panel__label">
                "Document Name"
                <input
                    class="upload-panel__input"
                    type="text"
                    placeholder="Enter document name"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label
                class="upload-panel__drop"
                class:upload-panel__drop--busy=move || form.get().uploading
            >
                <span class="upload-panel__icon" aria-hidden="true">"⇪"</span>
                <span class="upload-panel__hint">
                    <strong>"Click to upload"</strong>
                    " or drag and drop"
                </span>
                <input
                    class="upload-panel__file"
                    type="file"
                    accept=ACCEPT_HINT
                    disabled=move || form.get().uploading
                    on:change=on_change
                />
            </label>
            <Show when=move || form.get().uploading>
                <p class="upload-panel__status">"Uploading..."</p>
            </Show>
        </section>
    }
}
