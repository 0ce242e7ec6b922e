//! Storage seam between UI workflows and the hosted service.
//!
//! DESIGN
//! ======
//! Workflows in `state` are generic over `DocumentBackend` so the ordering
//! rules (blob before row, no insert on invalid input) can be checked against
//! an in-memory store. The production impl is `net::api::SupabaseClient`.
//!
//! Futures are `?Send`: every call runs on the single-threaded WASM executor
//! via `spawn_local`.

use async_trait::async_trait;

use super::error::BackendError;
use super::types::{Comment, Document, DocumentId, NewComment, NewDocument};

/// Row store plus object store operations used by the UI.
#[async_trait(?Send)]
pub trait DocumentBackend {
    /// All documents, newest first.
    async fn list_documents(&self) -> Result<Vec<Document>, BackendError>;

    /// Insert one metadata row.
    async fn insert_document(&self, row: &NewDocument) -> Result<(), BackendError>;

    /// Store raw bytes under `path` in the documents bucket.
    async fn upload_object(&self, path: &str, bytes: &[u8], content_type: &str) -> Result<(), BackendError>;

    /// Public URL for a stored object. Pure derivation, no round trip.
    fn public_url(&self, path: &str) -> String;

    /// All comments for one document, newest first.
    async fn list_comments(&self, document_id: DocumentId) -> Result<Vec<Comment>, BackendError>;

    /// Insert one comment row.
    async fn insert_comment(&self, row: &NewComment) -> Result<(), BackendError>;
}
