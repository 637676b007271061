//! Embedded stylesheets.

pub const DASHBOARD_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styles/dashboard.css"
));
