//! Local UI chrome state: view mode and the open document.
//!
//! DESIGN
//! ======
//! Keeps presentation choices out of `documents` so toggling layout or
//! opening a preview never touches the collection itself.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::Document;

/// Layout of the document listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Thumbnail-first cards.
    #[default]
    Grid,
    /// Single-line rows.
    List,
}

impl ViewMode {
    /// Modifier class for the listing container.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Grid => "document-list--grid",
            Self::List => "document-list--list",
        }
    }
}

/// Root-owned presentation state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub view_mode: ViewMode,
    /// Document open in the preview overlay, if any.
    pub selected: Option<Document>,
}

impl UiState {
    pub fn select(&mut self, doc: Document) {
        self.selected = Some(doc);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
