//! Session gate state and the async flows that drive it.

use crate::backend::api::{AuthError, SessionApi};
use crate::backend::utils::route::Route;
use crate::frontend::services::user::{Identity, validate_credentials};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Pending,
    Authenticated,
    Unauthenticated,
}

/// State owned by one mounted gate.
///
/// The identity lives inside the `Authenticated` variant, so it exists
/// exactly when the status is authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Pending,
    Authenticated(Identity),
    Unauthenticated,
}

impl GateState {
    pub fn status(&self) -> AuthStatus {
        match self {
            Self::Pending => AuthStatus::Pending,
            Self::Authenticated(_) => AuthStatus::Authenticated,
            Self::Unauthenticated => AuthStatus::Unauthenticated,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// Applies the verify outcome. Only a pending gate can settle; returns
    /// whether the state changed.
    pub fn settle(&mut self, outcome: Result<Identity, AuthError>) -> bool {
        if *self != Self::Pending {
            return false;
        }

        *self = match outcome {
            Ok(identity) => Self::Authenticated(identity),
            Err(_) => Self::Unauthenticated,
        };
        true
    }

    /// Ends an authenticated session (logout or expiry). Returns whether the
    /// state changed.
    pub fn expire(&mut self) -> bool {
        if matches!(self, Self::Authenticated(_)) {
            *self = Self::Unauthenticated;
            true
        } else {
            false
        }
    }
}

/// Liveness flag for an owning scope.
///
/// Clones share the flag. The owner revokes it on teardown; async work checks
/// it before touching state that belongs to the scope.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Issues one verify call and hands the outcome to `apply` if the scope is
/// still live. Returns whether the outcome was applied.
pub async fn verify_session<F>(api: &dyn SessionApi, liveness: &Liveness, apply: F) -> bool
where
    F: FnOnce(Result<Identity, AuthError>),
{
    let outcome = api.verify().await.map(Identity::from);

    if !liveness.is_live() {
        log::debug!("Gate torn down before verify resolved, discarding result");
        return false;
    }

    match &outcome {
        Ok(identity) => log::info!("Session verified for {}", identity.username()),
        Err(e) => log::info!("Session not verified: {e}"),
    }

    apply(outcome);
    true
}

/// Validates and submits credentials.
pub async fn sign_in(api: &dyn SessionApi, username: &str, password: &str) -> Result<(), AuthError> {
    let credentials = validate_credentials(username, password)?;

    match api.login(&credentials).await {
        Ok(()) => {
            log::info!("User {} logged in", credentials.username);
            Ok(())
        }
        Err(e) => {
            log::warn!("Login rejected for {}: {e}", credentials.username);
            Err(e)
        }
    }
}

/// Best-effort logout. The remote result never changes where the user goes.
pub async fn sign_out(api: &dyn SessionApi) -> Route {
    if let Err(e) = api.logout().await {
        log::warn!("Logout failed, leaving anyway: {e}");
    }
    Route::Login {}
}
