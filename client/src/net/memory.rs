//! In-memory `DocumentBackend` for workflow tests.
//!
//! Records every call in order and can be told to fail individual operations.
//! Timestamps advance by one second per inserted row so ordering is
//! deterministic.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use time::{Duration, OffsetDateTime};

use super::backend::DocumentBackend;
use super::error::BackendError;
use super::types::{Comment, Document, DocumentId, NewComment, NewDocument, sort_newest_first};

/// One observed backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ListDocuments,
    InsertDocument(NewDocument),
    UploadObject { path: String, len: usize, content_type: String },
    ListComments(DocumentId),
    InsertComment(NewComment),
}

/// Operations that can be forced to fail.
#[derive(Clone, Copy, Debug, Default)]
pub struct Failures {
    pub list_documents: bool,
    pub insert_document: bool,
    pub upload_object: bool,
    pub list_comments: bool,
    pub insert_comment: bool,
}

pub struct MemoryBackend {
    pub documents: RefCell<Vec<Document>>,
    pub comments: RefCell<Vec<Comment>>,
    pub objects: RefCell<Vec<(String, Vec<u8>)>>,
    pub calls: RefCell<Vec<Call>>,
    pub fail: Cell<Failures>,
    next_id: Cell<DocumentId>,
    clock: Cell<OffsetDateTime>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            documents: RefCell::new(Vec::new()),
            comments: RefCell::new(Vec::new()),
            objects: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
            fail: Cell::new(Failures::default()),
            next_id: Cell::new(1),
            clock: Cell::new(OffsetDateTime::UNIX_EPOCH + Duration::days(19_000)),
        }
    }

    pub fn failing(failures: Failures) -> Self {
        let backend = Self::new();
        backend.fail.set(failures);
        backend
    }

    /// Seed a document row as if the server had inserted it.
    pub fn seed_document(&self, name: &str, file_path: &str, content_type: &str) -> Document {
        let doc = Document {
            id: self.take_id(),
            name: name.to_owned(),
            created_at: self.tick(),
            file_path: file_path.to_owned(),
            content_type: Some(content_type.to_owned()),
        };
        self.documents.borrow_mut().push(doc.clone());
        doc
    }

    /// Seed a comment row as if the server had inserted it.
    pub fn seed_comment(&self, document_id: DocumentId, author: &str, content: &str) -> Comment {
        let comment = Comment {
            id: self.take_id(),
            document_id,
            content: content.to_owned(),
            created_at: self.tick(),
            author_name: author.to_owned(),
        };
        self.comments.borrow_mut().push(comment.clone());
        comment
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn take_id(&self) -> DocumentId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn tick(&self) -> OffsetDateTime {
        let now = self.clock.get() + Duration::seconds(1);
        self.clock.set(now);
        now
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn forced() -> BackendError {
    BackendError::Status { status: 500, body: "forced failure".to_owned() }
}

#[async_trait(?Send)]
impl DocumentBackend for MemoryBackend {
    async fn list_documents(&self) -> Result<Vec<Document>, BackendError> {
        self.record(Call::ListDocuments);
        if self.fail.get().list_documents {
            return Err(forced());
        }
        let mut docs = self.documents.borrow().clone();
        docs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(docs)
    }

    async fn insert_document(&self, row: &NewDocument) -> Result<(), BackendError> {
        self.record(Call::InsertDocument(row.clone()));
        if self.fail.get().insert_document {
            return Err(forced());
        }
        self.seed_document(&row.name, &row.file_path, &row.content_type);
        Ok(())
    }

    async fn upload_object(&self, path: &str, bytes: &[u8], content_type: &str) -> Result<(), BackendError> {
        self.record(Call::UploadObject {
            path: path.to_owned(),
            len: bytes.len(),
            content_type: content_type.to_owned(),
        });
        if self.fail.get().upload_object {
            return Err(forced());
        }
        self.objects.borrow_mut().push((path.to_owned(), bytes.to_vec()));
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("memory://documents/{path}")
    }

    async fn list_comments(&self, document_id: DocumentId) -> Result<Vec<Comment>, BackendError> {
        self.record(Call::ListComments(document_id));
        if self.fail.get().list_comments {
            return Err(forced());
        }
        let mut comments: Vec<Comment> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.document_id == document_id)
            .cloned()
            .collect();
        sort_newest_first(&mut comments);
        Ok(comments)
    }

    async fn insert_comment(&self, row: &NewComment) -> Result<(), BackendError> {
        self.record(Call::InsertComment(row.clone()));
        if self.fail.get().insert_comment {
            return Err(forced());
        }
        self.seed_comment(row.document_id, &row.author_name, &row.content);
        Ok(())
    }
}
