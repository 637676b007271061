mod backend;
mod frontend;
mod utils;

use crate::backend::api::HttpSessionApi;
use crate::backend::utils::config::DashboardConfig;
use crate::backend::utils::route::Route;
use crate::frontend::assets::DASHBOARD_CSS;
use crate::frontend::services::context::ApiHandle;
use anyhow::Context;
use dioxus::prelude::*;
use dioxus_router::Router;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    utils::logging::init();

    let config = DashboardConfig::load();
    let api = HttpSessionApi::new(&config.api).context("Failed to build session API client")?;
    log::info!("Session API at {}", config.api.base_url);

    launch(config, ApiHandle::new(Arc::new(api)))
}

#[cfg(feature = "desktop")]
fn launch(config: DashboardConfig, api: ApiHandle) -> anyhow::Result<()> {
    use dioxus::LaunchBuilder;
    use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

    let size = LogicalSize::new(config.ui.window_width, config.ui.window_height);
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(config.ui.window_title.clone())
                .with_inner_size(size)
                .with_min_inner_size(size),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(desktop)
        .with_context(api)
        .with_context(config.ui)
        .launch(App);

    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn launch(_config: DashboardConfig, _api: ApiHandle) -> anyhow::Result<()> {
    anyhow::bail!("built without a renderer, enable the `desktop` feature")
}

#[component]
fn App() -> Element {
    rsx! {
        style { dangerous_inner_html: DASHBOARD_CSS }
        Router::<Route> {}
    }
}
