//! Configuration and routing.

pub mod config;
pub mod route;
