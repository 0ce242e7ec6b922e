//! Preview overlay state: resolved URL, comment thread, and comment draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay issues two independent requests per opened document (public
//! URL and comment list). Each `open` bumps `generation`; results tagged with
//! an older generation, or landing after `close`, are dropped so a previous
//! document's comments can never appear under the current one.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::net::backend::DocumentBackend;
use crate::net::error::BackendError;
use crate::net::types::{Comment, Document, DocumentId, NewComment, sort_newest_first};

pub const SUBMIT_LABEL: &str = "Add Comment";
pub const SUBMITTING_LABEL: &str = "Adding...";

/// Per-overlay state for one open document.
#[derive(Clone, Debug, Default)]
pub struct PreviewState {
    pub document: Option<Document>,
    /// Public URL once resolved.
    pub url: Option<String>,
    /// Comments for `document`, newest first.
    pub comments: Vec<Comment>,
    pub author_name: String,
    pub draft: String,
    pub submitting: bool,
    pub generation: u64,
}

impl PreviewState {
    /// Switch to `doc`, dropping the previous document's URL, comments, and
    /// draft. Returns the ticket that fetches for `doc` must present.
    pub fn open(&mut self, doc: Document) -> u64 {
        self.generation += 1;
        self.document = Some(doc);
        self.url = None;
        self.comments.clear();
        self.draft.clear();
        self.submitting = false;
        self.generation
    }

    /// Close the overlay; any in-flight results become stale.
    pub fn close(&mut self) {
        self.generation += 1;
        self.document = None;
        self.url = None;
        self.comments.clear();
        self.submitting = false;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.document.is_some() && ticket == self.generation
    }

    pub fn document_id(&self) -> Option<DocumentId> {
        self.document.as_ref().map(|d| d.id)
    }

    /// Store the resolved URL if `ticket` is still current.
    pub fn apply_url(&mut self, ticket: u64, url: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.url = Some(url);
        true
    }

    /// Replace the comment list if `ticket` is still current.
    pub fn apply_comments(&mut self, ticket: u64, mut comments: Vec<Comment>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        sort_newest_first(&mut comments);
        self.comments = comments;
        true
    }

    /// Begin a submission. Returns the ticket, or `None` when one is
    /// already in flight or no document is open.
    pub fn begin_submit(&mut self) -> Option<u64> {
        if self.submitting || self.document.is_none() {
            return None;
        }
        self.submitting = true;
        Some(self.generation)
    }

    /// Finish a submission. On success the draft clears and, when the
    /// re-fetch succeeded, the refreshed list replaces the old one.
    pub fn finish_submit(&mut self, ticket: u64, result: &Result<Option<Vec<Comment>>, CommentError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.submitting = false;
        if let Ok(refreshed) = result {
            self.draft.clear();
            if let Some(comments) = refreshed {
                let mut comments = comments.clone();
                sort_newest_first(&mut comments);
                self.comments = comments;
            }
        }
        true
    }

    /// Both fields filled and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting && validate_comment(&self.author_name, &self.draft).is_ok()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentError {
    #[error("author name is empty")]
    MissingAuthor,

    #[error("comment text is empty")]
    MissingContent,

    #[error("comment insert failed: {0}")]
    Backend(#[source] BackendError),
}

impl CommentError {
    /// Text shown to the user for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingAuthor => "Please enter your name",
            Self::MissingContent => "Please enter a comment",
            Self::Backend(_) => "Error adding comment",
        }
    }
}

/// Trimmed `(author, content)`, checking the author first.
///
/// # Errors
///
/// `MissingAuthor` when the author is blank, otherwise `MissingContent`
/// when the text is blank.
pub fn validate_comment(author_name: &str, content: &str) -> Result<(String, String), CommentError> {
    let author_name = author_name.trim();
    if author_name.is_empty() {
        return Err(CommentError::MissingAuthor);
    }
    let content = content.trim();
    if content.is_empty() {
        return Err(CommentError::MissingContent);
    }
    Ok((author_name.to_owned(), content.to_owned()))
}

/// Fetch every comment on `document_id`, newest first.
///
/// # Errors
///
/// Propagates the backend failure unchanged.
pub async fn load_comments<B: DocumentBackend + ?Sized>(
    backend: &B,
    document_id: DocumentId,
) -> Result<Vec<Comment>, BackendError> {
    let mut comments = backend.list_comments(document_id).await?;
    sort_newest_first(&mut comments);
    Ok(comments)
}

/// Validate, insert one comment, then re-fetch the full thread.
///
/// Returns `Ok(None)` when the insert landed but the re-fetch failed; the
/// caller keeps its current list in that case.
///
/// # Errors
///
/// Validation errors make no backend call. `Backend` wraps a failed insert.
pub async fn post_comment<B: DocumentBackend + ?Sized>(
    backend: &B,
    document_id: DocumentId,
    author_name: &str,
    content: &str,
) -> Result<Option<Vec<Comment>>, CommentError> {
    let (author_name, content) = validate_comment(author_name, content)?;
    let row = NewComment { document_id, content, author_name };
    backend.insert_comment(&row).await.map_err(CommentError::Backend)?;
    match load_comments(backend, document_id).await {
        Ok(comments) => Ok(Some(comments)),
        Err(e) => {
            leptos::logging::warn!("comment refresh failed: document_id={document_id} error={e}");
            Ok(None)
        }
    }
}
