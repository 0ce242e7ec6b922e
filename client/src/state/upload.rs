//! Upload workflow: validate, store the blob, then insert the metadata row.
//!
//! ERROR HANDLING
//! ==============
//! A missing name is rejected before any network call. A blob failure aborts
//! before the row insert. A row failure after a successful blob leaves the
//! blob orphaned in storage; nothing is deleted to compensate.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::backend::DocumentBackend;
use crate::net::error::BackendError;
use crate::net::types::NewDocument;
use crate::util::storage_path::{effective_content_type, object_path_for};

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Document uploaded successfully!";

/// Picker hint only; the backend accepts any content type.
pub const ACCEPT_HINT: &str = ".pdf,.doc,.docx,.txt,image/*";

/// A file read from the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    /// Type declared by the browser; may be empty.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Upload panel form state.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub name: String,
    pub uploading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("document name is empty")]
    MissingName,

    #[error("blob upload failed: {0}")]
    Storage(#[source] BackendError),

    #[error("metadata insert failed: {0}")]
    Metadata(#[source] BackendError),

    /// The browser could not read the picked file.
    #[error("file read failed: {0}")]
    Read(String),
}

impl UploadError {
    /// Text shown to the user for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingName => "Please enter a document name",
            Self::Storage(_) | Self::Metadata(_) | Self::Read(_) => "Error uploading document",
        }
    }
}

/// Trimmed document name, or `MissingName` when blank.
///
/// # Errors
///
/// Returns `UploadError::MissingName` for an empty or whitespace-only name.
pub fn validate_name(name: &str) -> Result<String, UploadError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(UploadError::MissingName);
    }
    Ok(name.to_owned())
}

/// Store `file` under a fresh random path and record it as `name`.
///
/// Exactly one blob write followed by one row insert on success. Returns
/// the inserted row payload.
///
/// # Errors
///
/// `MissingName` without any backend call; `Storage` when the blob write
/// fails; `Metadata` when the row insert fails after the blob landed.
pub async fn upload_document<B: DocumentBackend + ?Sized>(
    backend: &B,
    name: &str,
    file: &PickedFile,
) -> Result<NewDocument, UploadError> {
    let name = validate_name(name)?;
    let file_path = object_path_for(&file.name);
    let content_type = effective_content_type(&file.content_type);

    backend
        .upload_object(&file_path, &file.bytes, &content_type)
        .await
        .map_err(UploadError::Storage)?;

    let row = NewDocument { name, file_path, content_type };
    backend.insert_document(&row).await.map_err(UploadError::Metadata)?;
    Ok(row)
}
