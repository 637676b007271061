use dioxus::prelude::*;

#[component]
pub fn LoadingScreen(visible: bool) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div { id: "loadingScreen",
            p { "Loading..." }
        }
    }
}
