//! Routed pages.

pub mod features;
pub mod login;
