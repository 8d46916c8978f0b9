//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::HttpPhotoApi;
use crate::pages::{login::LoginPage, profile::ProfilePage, signup::SignupPage};
use crate::state::session::BrowserSession;

/// Root application component.
///
/// Provides the API client and session store to every page and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = HttpPhotoApi::new(ApiConfig::from_env());
    log::info!("api base url {}", api.config().base_url());
    provide_context(api);
    provide_context(BrowserSession);

    view! {
        <Title text="Photo Gallery"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
