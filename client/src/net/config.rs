//! Connection settings for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads these from its environment and renders them into the shell
//! as `<meta>` tags. The hydrated client reads the same tags back so both
//! render passes build an identical `BackendConfig`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default storage bucket for document blobs.
pub const DEFAULT_BUCKET: &str = "documents";

pub const META_URL: &str = "docshelf-backend-url";
pub const META_KEY: &str = "docshelf-backend-key";
pub const META_BUCKET: &str = "docshelf-bucket";

/// Base URL, anonymous API key, and bucket name for the hosted service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    /// Public anonymous key sent as `apikey` and bearer token.
    pub anon_key: String,
    /// Object-store bucket holding document blobs.
    pub bucket: String,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str, bucket: &str) -> Self {
        let bucket = bucket.trim();
        Self {
            url: url.trim().trim_end_matches('/').to_owned(),
            anon_key: anon_key.trim().to_owned(),
            bucket: if bucket.is_empty() { DEFAULT_BUCKET.to_owned() } else { bucket.to_owned() },
        }
    }

    /// True when both the URL and key are present.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Rebuild the config from the `<meta>` tags rendered by the shell.
    /// Missing tags yield empty fields; see [`BackendConfig::is_configured`].
    pub fn from_page() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(&read_meta(META_URL), &read_meta(META_KEY), &read_meta(META_BUCKET))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> String {
    use wasm_bindgen::JsCast as _;

    let selector = format!("meta[name=\"{name}\"]");
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&selector).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
        .unwrap_or_default()
}
