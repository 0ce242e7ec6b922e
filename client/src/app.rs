//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::net::api::SupabaseClient;
use crate::net::config::{BackendConfig, META_BUCKET, META_KEY, META_URL};
use crate::pages::library::LibraryPage;
use crate::state::{documents::DocumentsState, toasts::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend settings are embedded as `<meta>` tags so the hydrated client
/// can rebuild them with [`BackendConfig::from_page`].
pub fn shell(options: LeptosOptions, backend: BackendConfig) -> impl IntoView {
    let url = backend.url.clone();
    let anon_key = backend.anon_key.clone();
    let bucket = backend.bucket.clone();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_URL content=url/>
                <meta name=META_KEY content=anon_key/>
                <meta name=META_BUCKET content=bucket/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App backend/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the backend client and all shared state contexts, then sets up
/// client-side routing.
#[component]
pub fn App(backend: BackendConfig) -> impl IntoView {
    provide_meta_context();

    if !backend.is_configured() {
        leptos::logging::warn!("backend url or key missing; document requests will fail");
    }
    provide_context(SupabaseClient::new(backend));

    let documents = RwSignal::new(DocumentsState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(documents);
    provide_context(ui);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/docshelf.css"/>
        <Title text="Docshelf"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LibraryPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
