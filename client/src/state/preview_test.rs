use super::*;
use crate::net::memory::{Call, Failures, MemoryBackend};
use futures::executor::block_on;

fn open_doc(backend: &MemoryBackend, name: &str) -> Document {
    backend.seed_document(name, &format!("{name}.pdf"), "application/pdf")
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_comment_checks_author_first() {
    assert_eq!(validate_comment("", "hi"), Err(CommentError::MissingAuthor));
    assert_eq!(validate_comment("", ""), Err(CommentError::MissingAuthor));
    assert_eq!(validate_comment("Ana", "  "), Err(CommentError::MissingContent));
    assert_eq!(validate_comment(" Ana ", " hi "), Ok(("Ana".to_owned(), "hi".to_owned())));
}

#[test]
fn validation_messages() {
    assert_eq!(CommentError::MissingAuthor.message(), "Please enter your name");
    assert_eq!(CommentError::MissingContent.message(), "Please enter a comment");
    assert_eq!(CommentError::Backend(BackendError::Unavailable).message(), "Error adding comment");
}

#[test]
fn missing_author_never_inserts() {
    let backend = MemoryBackend::new();
    let doc = open_doc(&backend, "A");
    backend.clear_calls();

    let err = block_on(post_comment(&backend, doc.id, "", "hi")).unwrap_err();
    assert_eq!(err.message(), "Please enter your name");
    assert!(backend.calls().is_empty());
}

#[test]
fn missing_content_never_inserts() {
    let backend = MemoryBackend::new();
    let doc = open_doc(&backend, "A");
    backend.clear_calls();

    let err = block_on(post_comment(&backend, doc.id, "Ana", "")).unwrap_err();
    assert_eq!(err, CommentError::MissingContent);
    assert!(backend.calls().is_empty());
}

// =============================================================
// Posting
// =============================================================

#[test]
fn post_comment_inserts_then_refetches_newest_first() {
    let backend = MemoryBackend::new();
    let doc = open_doc(&backend, "A");
    backend.seed_comment(doc.id, "Bo", "first");

    let refreshed = block_on(post_comment(&backend, doc.id, " Ana ", " second ")).unwrap().unwrap();

    let contents: Vec<_> = refreshed.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["second", "first"]);
    assert_eq!(refreshed[0].author_name, "Ana");
    assert_eq!(
        backend.calls(),
        vec![
            Call::InsertComment(NewComment {
                document_id: doc.id,
                content: "second".to_owned(),
                author_name: "Ana".to_owned(),
            }),
            Call::ListComments(doc.id),
        ]
    );
}

#[test]
fn post_comment_insert_failure_is_backend_error() {
    let backend = MemoryBackend::failing(Failures { insert_comment: true, ..Failures::default() });
    let err = block_on(post_comment(&backend, 1, "Ana", "hi")).unwrap_err();
    assert!(matches!(err, CommentError::Backend(_)));
    assert_eq!(backend.calls().len(), 1);
}

#[test]
fn post_comment_refresh_failure_still_reports_insert() {
    let backend = MemoryBackend::failing(Failures { list_comments: true, ..Failures::default() });
    let result = block_on(post_comment(&backend, 1, "Ana", "hi")).unwrap();
    assert!(result.is_none());
    assert_eq!(backend.comments.borrow().len(), 1);
}

#[test]
fn load_comments_scopes_to_document() {
    let backend = MemoryBackend::new();
    let a = open_doc(&backend, "A");
    let b = open_doc(&backend, "B");
    backend.seed_comment(a.id, "x", "on a");
    backend.seed_comment(b.id, "y", "on b");

    let comments = block_on(load_comments(&backend, a.id)).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "on a");
}

// =============================================================
// PreviewState transitions
// =============================================================

#[test]
fn preview_state_defaults() {
    let s = PreviewState::default();
    assert!(s.document.is_none());
    assert!(s.url.is_none());
    assert!(s.comments.is_empty());
    assert!(!s.submitting);
    assert_eq!(s.submit_label(), SUBMIT_LABEL);
    assert!(!s.can_submit());
}

#[test]
fn reopening_discards_previous_document_comments() {
    let backend = MemoryBackend::new();
    let a = open_doc(&backend, "A");
    let b = open_doc(&backend, "B");
    backend.seed_comment(a.id, "x", "on a");

    let mut state = PreviewState::default();
    let ticket_a = state.open(a.clone());
    let a_comments = block_on(load_comments(&backend, a.id)).unwrap();

    // User switches to B before A's comments land.
    let ticket_b = state.open(b.clone());
    assert!(!state.apply_comments(ticket_a, a_comments));
    assert!(state.comments.is_empty());

    let b_comments = block_on(load_comments(&backend, b.id)).unwrap();
    assert!(state.apply_comments(ticket_b, b_comments));
    assert!(state.comments.is_empty());
    assert_eq!(state.document_id(), Some(b.id));
}

#[test]
fn reopen_after_close_fetches_fresh() {
    let backend = MemoryBackend::new();
    let a = open_doc(&backend, "A");
    backend.seed_comment(a.id, "x", "old");

    let mut state = PreviewState::default();
    let t1 = state.open(a.clone());
    state.apply_comments(t1, block_on(load_comments(&backend, a.id)).unwrap());
    state.close();
    assert!(state.comments.is_empty());

    backend.seed_comment(a.id, "y", "new");
    let t2 = state.open(a.clone());
    assert_ne!(t1, t2);
    assert!(state.comments.is_empty());
    state.apply_comments(t2, block_on(load_comments(&backend, a.id)).unwrap());
    let contents: Vec<_> = state.comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["new", "old"]);
}

#[test]
fn results_after_close_are_dropped() {
    let backend = MemoryBackend::new();
    let a = open_doc(&backend, "A");
    let mut state = PreviewState::default();
    let ticket = state.open(a);
    state.close();
    assert!(!state.apply_url(ticket, "memory://documents/A.pdf".to_owned()));
    assert!(state.url.is_none());
}

#[test]
fn apply_comments_enforces_newest_first() {
    let backend = MemoryBackend::new();
    let a = open_doc(&backend, "A");
    let older = backend.seed_comment(a.id, "x", "older");
    let newer = backend.seed_comment(a.id, "y", "newer");

    let mut state = PreviewState::default();
    let ticket = state.open(a);
    state.apply_comments(ticket, vec![older, newer]);
    assert_eq!(state.comments[0].content, "newer");
}

#[test]
fn submit_lifecycle_clears_draft_on_success() {
    let backend = MemoryBackend::new();
    let a = open_doc(&backend, "A");
    let mut state = PreviewState::default();
    state.open(a.clone());
    state.author_name = "Ana".to_owned();
    state.draft = "hello".to_owned();
    assert!(state.can_submit());

    let ticket = state.begin_submit().unwrap();
    assert!(state.submitting);
    assert_eq!(state.submit_label(), SUBMITTING_LABEL);
    assert!(!state.can_submit());
    assert!(state.begin_submit().is_none());

    let result = block_on(post_comment(&backend, a.id, &state.author_name, &state.draft));
    assert!(state.finish_submit(ticket, &result));
    assert!(!state.submitting);
    assert!(state.draft.is_empty());
    assert_eq!(state.author_name, "Ana");
    assert_eq!(state.comments.len(), 1);
}

#[test]
fn submit_failure_keeps_draft() {
    let backend = MemoryBackend::failing(Failures { insert_comment: true, ..Failures::default() });
    let a = open_doc(&backend, "A");
    let mut state = PreviewState::default();
    state.open(a.clone());
    state.author_name = "Ana".to_owned();
    state.draft = "hello".to_owned();

    let ticket = state.begin_submit().unwrap();
    let result = block_on(post_comment(&backend, a.id, &state.author_name, &state.draft));
    state.finish_submit(ticket, &result);
    assert!(!state.submitting);
    assert_eq!(state.draft, "hello");
}

#[test]
fn open_keeps_author_name() {
    let backend = MemoryBackend::new();
    let mut state = PreviewState::default();
    state.open(open_doc(&backend, "A"));
    state.author_name = "Ana".to_owned();
    state.draft = "draft".to_owned();
    state.open(open_doc(&backend, "B"));
    assert_eq!(state.author_name, "Ana");
    assert!(state.draft.is_empty());
}
