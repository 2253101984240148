//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::gate::Gate;
use crate::net::api::ApiClient;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage,
    wishlist::WishlistPage,
};
use crate::routing::{AppRoute, HOME_PATH};
use crate::state::auth::{AuthState, refresh as refresh_auth};
use crate::state::session::Session;

/// Root application component.
///
/// Provides the session, API client, and auth flag as context, keeps the flag
/// in sync with other tabs, and gates every route on it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::local();
    let api = ApiClient::from_env(session.clone());
    let auth = RwSignal::new(AuthState::from_session(&session));

    provide_context(session.clone());
    provide_context(api);
    provide_context(auth);

    crate::util::storage_events::install_storage_listener(move || refresh_auth(auth, &session));

    view! {
        <Title text="Shared Wishlists"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                <Route
                    path={StaticSegment(AppRoute::Home.segment())}
                    view=|| view! { <Gate route=AppRoute::Home><HomePage/></Gate> }
                />
                <Route
                    path={StaticSegment(AppRoute::Login.segment())}
                    view=|| view! { <Gate route=AppRoute::Login><LoginPage/></Gate> }
                />
                <Route
                    path={StaticSegment(AppRoute::Register.segment())}
                    view=|| view! { <Gate route=AppRoute::Register><RegisterPage/></Gate> }
                />
                <Route
                    path={StaticSegment(AppRoute::Dashboard.segment())}
                    view=|| view! { <Gate route=AppRoute::Dashboard><DashboardPage/></Gate> }
                />
                <Route
                    path={(StaticSegment(AppRoute::Wishlist.segment()), ParamSegment("id"))}
                    view=|| view! { <Gate route=AppRoute::Wishlist><WishlistPage/></Gate> }
                />
            </Routes>
        </Router>
    }
}
