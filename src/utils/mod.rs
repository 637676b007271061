//! Custom utilities.

pub mod logging;
