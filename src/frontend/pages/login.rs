//! Login page.

use crate::backend::api::AuthError;
use crate::backend::utils::route::Route;
use crate::frontend::services::context::use_session_api;
use crate::frontend::services::session::sign_in;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

/// Message shown under the form for a failed login.
pub fn login_error_message(err: &AuthError) -> String {
    match err {
        AuthError::Invalid(reason) => reason.clone(),
        AuthError::Unauthorized | AuthError::Rejected { .. } => {
            "Invalid login credentials".to_string()
        }
        AuthError::Transport(_) | AuthError::Decode(_) => {
            "Could not reach the server, please try again".to_string()
        }
    }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let api = use_session_api();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if loading() {
            return;
        }

        error.set(None);
        loading.set(true);

        let api = api.clone();
        let username_value = username();
        let password_value = password();
        spawn(async move {
            let result = sign_in(&*api, &username_value, &password_value).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    nav.push(Route::home());
                }
                Err(e) => error.set(Some(login_error_message(&e))),
            }
        });
    };

    rsx! {
        div { class: "auth-container",
            div { class: "card login-card",
                h2 { class: "login-title", "Sign in" }

                form { onsubmit: on_submit,
                    div { class: "login-field",
                        label { r#for: "username", "Username:" }
                        input {
                            id: "username",
                            class: "login-input",
                            r#type: "text",
                            placeholder: "Enter your username",
                            value: "{username()}",
                            required: true,
                            autocomplete: "username",
                            oninput: move |e| username.set(e.value()),
                        }
                    }

                    div { class: "login-field",
                        label { r#for: "password", "Password:" }
                        input {
                            id: "password",
                            class: "login-input",
                            r#type: "password",
                            value: "{password()}",
                            required: true,
                            autocomplete: "current-password",
                            oninput: move |e| password.set(e.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: if loading() { "login-btn loading" } else { "login-btn" },
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                if let Some(message) = error() {
                    div { class: "login-error", role: "alert", "{message}" }
                }
            }
        }
    }
}
