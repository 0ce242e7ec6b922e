//! Browser glue for file pickers and new-tab navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only `web-sys` calls so components can
//! stay free of DOM casting. Outside the browser they are no-ops.

#[cfg(feature = "hydrate")]
use crate::state::upload::PickedFile;

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                leptos::logging::warn!("open {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// The first file chosen in the `<input type="file">` that fired `ev`.
#[cfg(feature = "hydrate")]
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast as _;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Reset a file input so choosing the same file again fires `change`.
#[cfg(feature = "hydrate")]
pub fn reset_file_input(ev: &leptos::ev::Event) {
    use wasm_bindgen::JsCast as _;

    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
        input.set_value("");
    }
}

/// Read a picked file's name, declared type, and bytes.
///
/// # Errors
///
/// Returns an error string if the browser fails to read the file.
#[cfg(feature = "hydrate")]
pub async fn read_picked_file(file: &web_sys::File) -> Result<PickedFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(PickedFile {
        name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
