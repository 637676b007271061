//! Feature pages rendered inside the shell. Their content lives elsewhere;
//! these only mark the region.

use dioxus::prelude::*;

#[component]
fn FeaturePage(title: &'static str) -> Element {
    rsx! {
        section { class: "feature-page",
            h1 { class: "feature-title", "{title}" }
        }
    }
}

#[component]
pub fn Map() -> Element {
    rsx! { FeaturePage { title: "Map" } }
}

#[component]
pub fn Explorer() -> Element {
    rsx! { FeaturePage { title: "Explorer" } }
}

#[component]
pub fn Log() -> Element {
    rsx! { FeaturePage { title: "Log" } }
}

#[component]
pub fn NewDetectors() -> Element {
    rsx! { FeaturePage { title: "New detectors" } }
}

#[component]
pub fn Tickets() -> Element {
    rsx! { FeaturePage { title: "Tickets" } }
}

#[component]
pub fn Hardware() -> Element {
    rsx! { FeaturePage { title: "Hardware" } }
}

#[component]
pub fn Contracts() -> Element {
    rsx! { FeaturePage { title: "Contracts" } }
}
