use crate::backend::utils::route::Route;
use crate::frontend::components::layout::{LoadingScreen, Sidebar, UserBar};
use crate::frontend::services::context::use_ui_config;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;
use std::time::Duration;

/// Shell around every protected page: sidebar, user bar and content region.
///
/// The overlay shown on mount is cosmetic and unrelated to the gate's own
/// pending state.
#[component]
pub fn Layout() -> Element {
    let ui = use_ui_config();
    let mut overlay_visible = use_signal(|| true);
    let delay = Duration::from_millis(ui.loading_overlay_ms);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(delay).await;
            overlay_visible.set(false);
        });
    });

    rsx! {
        div { class: "app-layout",
            LoadingScreen { visible: overlay_visible() }

            UserBar {}

            Sidebar {}

            div { class: "page-content", id: "pageContent",
                Outlet::<Route> {}
            }
        }
    }
}
