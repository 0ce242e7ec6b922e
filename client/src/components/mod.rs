//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the upload, listing, and preview surfaces while reading
//! shared state from Leptos context providers.

pub mod document_list;
pub mod document_preview;
pub mod toaster;
pub mod upload_panel;
