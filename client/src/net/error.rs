//! Errors produced by calls to the hosted row/object store.

/// A failed round trip to the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response (network, CORS, builder error).
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("backend responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected rows.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No backend transport exists in this build (server-side rendering).
    #[error("backend not available in this build")]
    Unavailable,
}
