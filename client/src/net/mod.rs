//! Networking modules for the hosted row store and object store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the storage seam, `api` implements it over the Supabase
//! REST endpoints, `config` carries connection settings, and `types` defines
//! the table rows.

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
#[cfg(test)]
pub mod memory;
pub mod types;
