use crate::frontend::services::context::{
    ApiHandle, SessionControl, use_identity, use_session_api, use_session_control,
};
use crate::frontend::services::session::sign_out;
use dioxus::prelude::*;
use dioxus_router::{Navigator, navigator};

/// Logs out and leaves the protected area regardless of what the server said.
pub async fn log_out(api: ApiHandle, session: SessionControl, nav: Navigator) {
    let target = sign_out(&*api).await;
    session.expire();
    nav.replace(target);
}

/// Signed-in user name and the logout button.
#[component]
pub fn UserBar() -> Element {
    let identity = use_identity();
    let api = use_session_api();
    let session = use_session_control();
    let nav = navigator();

    let logout = move |_: MouseEvent| {
        spawn(log_out(api.clone(), session, nav));
    };

    rsx! {
        div { class: "user-bar",
            div { class: "user-info",
                span { class: "user-label", "Signed in as:" }
                span { class: "user-name", "{identity.display_name()}" }
            }
            button { class: "logout-btn", title: "Log out", onclick: logout, "Log out" }
        }
    }
}
