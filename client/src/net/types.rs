//! Row DTOs for the hosted `documents` and `comments` tables.
//!
//! DESIGN
//! ======
//! Field names mirror the table columns so serde maps rows without renames.
//! Server-assigned columns (`id`, `created_at`) only appear on the read side;
//! insert payloads carry the user-supplied columns alone.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Server-assigned primary key shared by both tables.
pub type DocumentId = i64;

/// Content-type prefix that marks a document as thumbnail-capable.
pub const IMAGE_CONTENT_PREFIX: &str = "image/";

/// A row of the `documents` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier assigned on insert.
    pub id: DocumentId,
    /// User-supplied display name.
    pub name: String,
    /// Insert timestamp; the listing sorts on it, newest first.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Object path inside the documents bucket.
    pub file_path: String,
    /// Declared MIME type. Older rows may carry `null`.
    #[serde(default)]
    pub content_type: Option<String>,
}

impl Document {
    /// Whether the listing should show an inline thumbnail for this row.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with(IMAGE_CONTENT_PREFIX))
    }
}

/// Insert payload for the `documents` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewDocument {
    pub name: String,
    pub file_path: String,
    pub content_type: String,
}

/// A row of the `comments` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: DocumentId,
    /// Owning document. Not validated client-side.
    pub document_id: DocumentId,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub author_name: String,
}

/// Insert payload for the `comments` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub document_id: DocumentId,
    pub content: String,
    pub author_name: String,
}

/// Sort comments newest first by creation time.
///
/// The sort is stable, so rows sharing a timestamp keep the server's order.
pub fn sort_newest_first(comments: &mut [Comment]) {
    comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
