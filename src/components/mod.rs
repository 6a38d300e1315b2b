//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome and form controls while reading
//! shared state from Leptos context providers.

pub mod layout;
pub mod sidebar;
pub mod text_input;
pub mod toast;
pub mod topbar;
