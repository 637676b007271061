//! UI components. The session gate lives with the layouts because it is
//! mounted by the router as the outermost protected layout.

pub mod layout;
