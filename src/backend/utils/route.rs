use crate::frontend::components::layout::{AuthGate, Layout};
use crate::frontend::pages::features::{
    Contracts, Explorer, Hardware, Log, Map, NewDetectors, Tickets,
};
use crate::frontend::pages::login::Login;
use crate::frontend::services::session::AuthStatus;

use dioxus::prelude::*;
use dioxus_router::Routable;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGate)]
        #[layout(Layout)]
            #[redirect("/", || Route::Explorer {})]
            #[route("/map")]
            Map {},
            #[route("/explorer")]
            Explorer {},
            #[route("/log")]
            Log {},
            #[route("/newdetectors")]
            NewDetectors {},
            #[route("/tickets")]
            Tickets {},
            #[route("/hardware")]
            Hardware {},
            #[route("/contracts")]
            Contracts {},
}

impl Route {
    /// Where signed-in users land.
    pub fn home() -> Self {
        Self::Explorer {}
    }

    /// Resolves the route shown for a protected request given the gate
    /// status. Only routes under `AuthGate` go through here.
    ///
    /// `None` means nothing may render yet.
    pub fn admit(self, status: AuthStatus) -> Option<Self> {
        match status {
            AuthStatus::Pending => None,
            AuthStatus::Authenticated => Some(self),
            AuthStatus::Unauthenticated => Some(Self::Login {}),
        }
    }
}
