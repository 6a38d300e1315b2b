//! Networking modules for the external API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP client and credential attachment, `types` defines the
//! wire schema and the error taxonomy shared with the UI layer.

pub mod api;
pub mod types;
