//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `nav`, `notifications`) so pages and
//! components depend on small focused models, each provided once at the
//! application root via Leptos context.

pub mod nav;
pub mod notifications;
pub mod session;
