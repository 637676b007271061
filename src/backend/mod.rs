//! Backend module: remote session API and app plumbing.

pub mod api;
pub mod utils;
