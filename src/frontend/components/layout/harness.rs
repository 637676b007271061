//! Mounts the real route tree in a `VirtualDom` over a memory history.

use crate::backend::api::fake::FakeSessionApi;
use crate::backend::utils::config::UiConfig;
use crate::backend::utils::route::Route;
use crate::frontend::services::context::ApiHandle;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use dioxus_router::Router;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

const SCOPE_SEARCH_LIMIT: usize = 512;

pub struct Harness {
    dom: VirtualDom,
    pub api: Arc<FakeSessionApi>,
    history: Rc<dyn History>,
}

impl Harness {
    pub fn mount(path: &str, api: FakeSessionApi) -> Self {
        let ui = UiConfig {
            loading_overlay_ms: 10,
            ..UiConfig::default()
        };
        Self::mount_with(path, api, ui)
    }

    pub fn mount_with(path: &str, api: FakeSessionApi, ui: UiConfig) -> Self {
        let api = Arc::new(api);
        let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));

        let mut dom = VirtualDom::new(Root)
            .with_root_context(ApiHandle::new(api.clone()))
            .with_root_context(ui)
            .with_root_context(history.clone());
        dom.rebuild_in_place();

        Self { dom, api, history }
    }

    /// Drives tasks, effects and re-renders for `window`.
    pub async fn pump_for(&mut self, window: Duration) {
        let deadline = Instant::now() + window;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            match tokio::time::timeout(deadline - now, self.dom.wait_for_work()).await {
                Ok(()) => self.dom.render_immediate(&mut NoOpMutations),
                Err(_) => break,
            }
        }
    }

    pub async fn settle(&mut self) {
        self.pump_for(Duration::from_millis(100)).await;
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn path(&self) -> String {
        self.history.current_route()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// First mounted scope that can see a `T` context.
    pub fn scope_with<T: Clone + 'static>(&self) -> Option<ScopeId> {
        self.dom.in_runtime(|| {
            (0..SCOPE_SEARCH_LIMIT).map(ScopeId).find(|&id| {
                self.dom.get_scope(id).is_some() && self.dom.in_scope(id, try_consume_context::<T>).is_some()
            })
        })
    }

    /// Runs `f` inside the first scope that can see a `T` context.
    pub fn in_scope_with<T: Clone + 'static, O>(&self, f: impl FnOnce() -> O) -> Option<O> {
        let scope = self.scope_with::<T>()?;
        Some(self.dom.in_scope(scope, f))
    }
}

#[component]
fn Root() -> Element {
    rsx! { Router::<Route> {} }
}
