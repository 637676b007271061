use crate::backend::utils::route::Route;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

/// One sidebar destination.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub route: Route,
    pub title: &'static str,
    pub glyph: &'static str,
    /// Hidden entries belong to partially released features; their routes
    /// still resolve.
    pub visible: bool,
}

impl NavEntry {
    fn new(route: Route, title: &'static str, glyph: &'static str, visible: bool) -> Self {
        Self {
            route,
            title,
            glyph,
            visible,
        }
    }

    pub fn class(&self, active: bool) -> String {
        let mut classes = vec!["sidebar__icon"];
        if !self.visible {
            classes.push("sidebar__icon--hidden");
        }
        if active {
            classes.push("sidebar__active");
        }
        classes.join(" ")
    }
}

pub fn sidebar_entries() -> [NavEntry; 7] {
    [
        NavEntry::new(Route::Map {}, "Map", "M", true),
        NavEntry::new(Route::Explorer {}, "Explorer", "E", true),
        NavEntry::new(Route::Log {}, "Log", "L", true),
        NavEntry::new(Route::NewDetectors {}, "New detectors", "N", true),
        NavEntry::new(Route::Tickets {}, "Tickets", "T", false),
        NavEntry::new(Route::Hardware {}, "Hardware", "H", false),
        NavEntry::new(Route::Contracts {}, "Contracts", "C", false),
    ]
}

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            div { class: "sidebar__logo", title: "YouDash", "YD" }

            for entry in sidebar_entries() {
                SidebarLink { key: "{entry.title}", entry }
            }
        }
    }
}

#[component]
fn SidebarLink(entry: NavEntry) -> Element {
    let nav = navigator();
    let current = use_route::<Route>();
    let class = entry.class(current == entry.route);
    let target = entry.route.clone();

    rsx! {
        div {
            class: "{class}",
            title: entry.title,
            onclick: move |_| {
                nav.push(target.clone());
            },
            span { class: "sidebar__glyph", "{entry.glyph}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_route_order() {
        let paths: Vec<String> = sidebar_entries()
            .iter()
            .map(|entry| entry.route.to_string())
            .collect();
        assert_eq!(
            paths,
            [
                "/map",
                "/explorer",
                "/log",
                "/newdetectors",
                "/tickets",
                "/hardware",
                "/contracts"
            ]
        );
    }

    #[test]
    fn unreleased_features_are_hidden() {
        let hidden: Vec<&str> = sidebar_entries()
            .iter()
            .filter(|entry| !entry.visible)
            .map(|entry| entry.title)
            .collect();
        assert_eq!(hidden, ["Tickets", "Hardware", "Contracts"]);
    }

    #[test]
    fn classes_reflect_visibility_and_activity() {
        let [map, .., contracts] = sidebar_entries();
        assert_eq!(map.class(false), "sidebar__icon");
        assert_eq!(map.class(true), "sidebar__icon sidebar__active");
        assert_eq!(
            contracts.class(true),
            "sidebar__icon sidebar__icon--hidden sidebar__active"
        );
    }
}
