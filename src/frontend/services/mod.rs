//! Frontend services for session state and shared handles.

pub mod context;
pub mod session;
pub mod user;
