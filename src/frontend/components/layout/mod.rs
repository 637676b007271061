//! Layout components.

pub mod gate;
#[cfg(test)]
pub mod harness;
pub mod loading;
pub mod main;
pub mod navigation;
pub mod user_bar;

pub use gate::AuthGate;
pub use loading::LoadingScreen;
pub use main::Layout;
pub use navigation::Sidebar;
pub use user_bar::UserBar;
