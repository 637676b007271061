//! Session gate for the protected part of the route tree.

use crate::backend::utils::route::Route;
use crate::frontend::services::context::{IdentityHandle, SessionControl, use_session_api};
use crate::frontend::services::session::{AuthStatus, GateState, Liveness, verify_session};
use crate::frontend::services::user::Identity;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, use_navigator, use_route};

/// Verifies the session once per mount and renders the protected subtree
/// only for an authenticated user.
///
/// While pending nothing below the gate is mounted; when unauthenticated the
/// gate replaces the current history entry with the login page.
#[component]
pub fn AuthGate() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();
    let api = use_session_api();
    let state = use_signal(GateState::default);
    let liveness = use_hook(Liveness::new);

    use_context_provider(|| SessionControl::new(state));

    use_drop({
        let liveness = liveness.clone();
        move || liveness.revoke()
    });

    use_hook(move || {
        spawn(async move {
            let mut state = state;
            verify_session(&*api, &liveness, |outcome| {
                state.write().settle(outcome);
            })
            .await;
        });
    });

    use_effect(move || {
        let status = state.read().status();
        if let Some(target) = route.clone().admit(status)
            && target != route
        {
            nav.replace(target);
        }
    });

    let status = state.read().status();
    let identity = state.read().identity().cloned();
    match (status, identity) {
        (AuthStatus::Authenticated, Some(identity)) => rsx! {
            IdentityScope { identity,
                Outlet::<Route> {}
            }
        },
        (AuthStatus::Pending, _) => rsx! {
            div { class: "gate-pending", "Loading..." }
        },
        _ => rsx! {},
    }
}

/// Provides the verified identity to everything below it.
#[component]
fn IdentityScope(identity: Identity, children: Element) -> Element {
    use_context_provider(move || IdentityHandle::new(identity));
    children
}
