//! Route-level page modules.

pub mod dashboard;
pub mod login;
