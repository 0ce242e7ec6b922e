//! REST client for the hosted row store and object store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `BackendError::Unavailable`, since
//! the host never talks to the backend on the user's behalf.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `BackendError`s instead of panics; the workflows in
//! `state` decide which failures become toasts and which are only logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::backend::DocumentBackend;
use super::config::BackendConfig;
use super::error::BackendError;
use super::types::{Comment, Document, DocumentId, NewComment, NewDocument};

pub const DOCUMENTS_TABLE: &str = "documents";
pub const COMMENTS_TABLE: &str = "comments";

/// Thin typed wrapper over the Supabase REST and storage endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupabaseClient {
    config: BackendConfig,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn table_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.url)
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn documents_query(&self) -> String {
        format!("{}?select=*&order=created_at.desc", self.table_endpoint(DOCUMENTS_TABLE))
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn comments_query(&self, document_id: DocumentId) -> String {
        format!(
            "{}?select=*&document_id=eq.{document_id}&order=created_at.desc",
            self.table_endpoint(COMMENTS_TABLE)
        )
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn object_endpoint(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.config.url, self.config.bucket, path.trim_start_matches('/'))
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn bearer(&self) -> String {
        format!("Bearer {}", self.config.anon_key)
    }

    #[cfg(feature = "hydrate")]
    fn authorized(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &self.bearer())
    }

    #[cfg(feature = "hydrate")]
    async fn select<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, BackendError> {
        let resp = self
            .authorized(gloo_net::http::Request::get(url))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let resp = ensure_ok(resp).await?;
        resp.json::<Vec<T>>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    #[cfg(feature = "hydrate")]
    async fn insert<T: serde::Serialize>(&self, table: &str, row: &T) -> Result<(), BackendError> {
        let resp = self
            .authorized(gloo_net::http::Request::post(&self.table_endpoint(table)))
            .header("Prefer", "return=minimal")
            .json(&[row])
            .map_err(|e| BackendError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        ensure_ok(resp).await.map(|_| ())
    }
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, BackendError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(BackendError::Status { status, body })
}

#[async_trait(?Send)]
impl DocumentBackend for SupabaseClient {
    async fn list_documents(&self) -> Result<Vec<Document>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.select::<Document>(&self.documents_query()).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(BackendError::Unavailable)
        }
    }

    async fn insert_document(&self, row: &NewDocument) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.insert(DOCUMENTS_TABLE, row).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = row;
            Err(BackendError::Unavailable)
        }
    }

    async fn upload_object(&self, path: &str, bytes: &[u8], content_type: &str) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let body = js_sys::Uint8Array::from(bytes);
            let resp = self
                .authorized(gloo_net::http::Request::post(&self.object_endpoint(path)))
                .header("Content-Type", content_type)
                .header("x-upsert", "false")
                .body(body)
                .map_err(|e| BackendError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| BackendError::Request(e.to_string()))?;
            ensure_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, bytes, content_type);
            Err(BackendError::Unavailable)
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url,
            self.config.bucket,
            path.trim_start_matches('/')
        )
    }

    async fn list_comments(&self, document_id: DocumentId) -> Result<Vec<Comment>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.select::<Comment>(&self.comments_query(document_id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = document_id;
            Err(BackendError::Unavailable)
        }
    }

    async fn insert_comment(&self, row: &NewComment) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.insert(COMMENTS_TABLE, row).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = row;
            Err(BackendError::Unavailable)
        }
    }
}
