//! Scoped handles shared through the component tree.

use crate::backend::api::SessionApi;
use crate::backend::utils::config::UiConfig;
use crate::frontend::services::session::GateState;
use crate::frontend::services::user::Identity;
use dioxus::prelude::*;
use std::ops::Deref;
use std::sync::Arc;

pub const IDENTITY_MISUSE: &str = "use_identity must be called inside an authenticated AuthGate";

/// Read-only view of the verified identity.
///
/// Only an authenticated gate provides one, so every holder sits below a
/// gate that has verified the session.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityHandle(Arc<Identity>);

impl IdentityHandle {
    pub fn new(identity: Identity) -> Self {
        Self(Arc::new(identity))
    }
}

impl Deref for IdentityHandle {
    type Target = Identity;

    fn deref(&self) -> &Identity {
        &self.0
    }
}

/// Unwraps a looked-up identity, panicking on misuse.
pub fn require_identity(found: Option<IdentityHandle>) -> IdentityHandle {
    match found {
        Some(handle) => handle,
        None => panic!("{IDENTITY_MISUSE}"),
    }
}

/// Returns the identity provided by the nearest authenticated gate.
///
/// # Panics
///
/// Panics when called from a component that is not mounted below an
/// authenticated gate. That is an integration bug, not a runtime state.
pub fn use_identity() -> IdentityHandle {
    let found = use_hook(try_consume_context::<IdentityHandle>);
    require_identity(found)
}

/// Lets descendants end the session owned by the enclosing gate.
#[derive(Clone, Copy)]
pub struct SessionControl {
    state: Signal<GateState>,
}

impl SessionControl {
    pub fn new(state: Signal<GateState>) -> Self {
        Self { state }
    }

    /// Flips the gate to unauthenticated. The gate then unmounts its subtree
    /// and redirects to the login page.
    pub fn expire(mut self) {
        if self.state.write().expire() {
            log::info!("Session ended, tearing down protected views");
        }
    }
}

pub fn use_session_control() -> SessionControl {
    use_context::<SessionControl>()
}

/// Shared session API client.
#[derive(Clone)]
pub struct ApiHandle(Arc<dyn SessionApi>);

impl ApiHandle {
    pub fn new(api: Arc<dyn SessionApi>) -> Self {
        Self(api)
    }
}

impl Deref for ApiHandle {
    type Target = dyn SessionApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub fn use_session_api() -> ApiHandle {
    use_context::<ApiHandle>()
}

pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provided_identity_is_returned() {
        let handle = IdentityHandle::new(Identity::new("alice@example.com"));
        let found = require_identity(Some(handle.clone()));
        assert_eq!(found, handle);
        assert_eq!(found.display_name(), "alice");
    }

    #[test]
    #[should_panic(expected = "use_identity must be called inside an authenticated AuthGate")]
    fn missing_identity_panics() {
        require_identity(None);
    }

    #[test]
    fn missing_identity_panics_every_time() {
        for _ in 0..3 {
            let result = std::panic::catch_unwind(|| require_identity(None));
            assert!(result.is_err());
        }
    }
}
