//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`documents`, `preview`, `upload`, `ui`,
//! `toasts`) so each component depends on a small focused model. Workflows
//! that touch the backend live next to the state they update.

pub mod documents;
pub mod preview;
pub mod toasts;
pub mod ui;
pub mod upload;
