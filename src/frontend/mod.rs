//! Frontend module for the `YouDash` dashboard.

pub mod assets;
pub mod components;
pub mod pages;
pub mod services;
