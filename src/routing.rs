//! Route table and auth-gate decisions.
//!
//! DESIGN
//! ======
//! `app::App` builds its `<Route>`s from [`AppRoute::segment`] and wraps each
//! view in a `Gate` using [`AppRoute::access`], so the gate rules tested here
//! are the ones the router runs. Unknown paths fall back to [`HOME_PATH`].

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Authentication requirement attached to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reachable regardless of auth state.
    Public,
    /// Only for signed-out users (login, register).
    GuestOnly,
    /// Only for signed-in users.
    Protected,
}

/// A client-visible route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    Dashboard,
    /// `/wishlist/:id`; the id is read from the route params by the page.
    Wishlist,
}

impl AppRoute {
    pub const ALL: [Self; 5] = [Self::Home, Self::Login, Self::Register, Self::Dashboard, Self::Wishlist];

    /// Leading static path segment matched by the router.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::Wishlist => "wishlist",
        }
    }

    pub fn access(self) -> Access {
        match self {
            Self::Home => Access::Public,
            Self::Login | Self::Register => Access::GuestOnly,
            Self::Dashboard | Self::Wishlist => Access::Protected,
        }
    }

    /// Redirect target when visiting this route with the given auth flag.
    pub fn redirect(self, authenticated: bool) -> Option<&'static str> {
        redirect_for(self.access(), authenticated)
    }
}

/// Canonical path of a wishlist detail view.
pub fn wishlist_path(id: &str) -> String {
    format!("/{}/{id}", AppRoute::Wishlist.segment())
}

/// Redirect target for a route with `access` given the current auth flag.
pub fn redirect_for(access: Access, authenticated: bool) -> Option<&'static str> {
    match (access, authenticated) {
        (Access::Protected, false) => Some(LOGIN_PATH),
        (Access::GuestOnly, true) => Some(DASHBOARD_PATH),
        _ => None,
    }
}
