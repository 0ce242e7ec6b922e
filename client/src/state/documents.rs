//! Document collection state owned by the library page.
//!
//! DESIGN
//! ======
//! The collection is replaced wholesale by each list query; there is no
//! incremental merge. Each query takes a ticket from `begin_load`, and only
//! the newest ticket may land, so a slow early response cannot overwrite a
//! later refresh. Thumbnail URLs are derived once per document id when a
//! result lands rather than on every render.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use std::collections::HashMap;

use crate::net::backend::DocumentBackend;
use crate::net::error::BackendError;
use crate::net::types::{Document, DocumentId};

/// User-facing message for a failed list query.
pub const LOAD_FAILED_MESSAGE: &str = "Error loading documents";

/// Shared document list state.
#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    /// Documents in server order (newest first).
    pub items: Vec<Document>,
    /// Public URLs for image documents, keyed by document id.
    pub thumbnails: HashMap<DocumentId, String>,
    pub loading: bool,
    pub error: Option<String>,
    /// Ticket of the most recent list query.
    pub request_seq: u64,
}

impl DocumentsState {
    /// Mark a list query as in flight and return its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    /// Apply a list query result. Returns `false` when the ticket is stale
    /// and the result was discarded.
    ///
    /// On failure the previous items stay in place and `error` is set.
    pub fn finish_load(
        &mut self,
        ticket: u64,
        result: Result<Vec<Document>, BackendError>,
        resolve_url: impl Fn(&str) -> String,
    ) -> bool {
        if ticket != self.request_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.thumbnails = items
                    .iter()
                    .filter(|doc| doc.is_image())
                    .map(|doc| (doc.id, resolve_url(&doc.file_path)))
                    .collect();
                self.items = items;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
        true
    }

    /// Cached thumbnail URL for an image document.
    pub fn thumbnail(&self, id: DocumentId) -> Option<&str> {
        self.thumbnails.get(&id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Run the list query: all documents ordered by creation time, newest first.
///
/// # Errors
///
/// Propagates the backend failure unchanged.
pub async fn fetch_documents<B: DocumentBackend + ?Sized>(backend: &B) -> Result<Vec<Document>, BackendError> {
    backend.list_documents().await
}
