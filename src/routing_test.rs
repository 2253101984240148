use super::*;

#[test]
fn protected_routes_redirect_to_login_when_signed_out() {
    assert_eq!(AppRoute::Dashboard.redirect(false), Some("/login"));
    assert_eq!(AppRoute::Wishlist.redirect(false), Some("/login"));
}

#[test]
fn protected_routes_render_when_signed_in() {
    assert_eq!(AppRoute::Dashboard.redirect(true), None);
    assert_eq!(AppRoute::Wishlist.redirect(true), None);
}

#[test]
fn guest_routes_redirect_to_dashboard_when_signed_in() {
    assert_eq!(AppRoute::Login.redirect(true), Some("/dashboard"));
    assert_eq!(AppRoute::Register.redirect(true), Some("/dashboard"));
}

#[test]
fn guest_routes_render_when_signed_out() {
    assert_eq!(AppRoute::Login.redirect(false), None);
    assert_eq!(AppRoute::Register.redirect(false), None);
}

#[test]
fn home_renders_in_both_states() {
    assert_eq!(AppRoute::Home.redirect(false), None);
    assert_eq!(AppRoute::Home.redirect(true), None);
}

#[test]
fn redirect_targets_are_routes_in_the_table() {
    let paths: Vec<String> = AppRoute::ALL.iter().map(|r| format!("/{}", r.segment())).collect();
    for route in AppRoute::ALL {
        for authenticated in [false, true] {
            if let Some(target) = route.redirect(authenticated) {
                assert!(paths.iter().any(|p| p == target), "{target} not routed");
            }
        }
    }
    assert!(paths.iter().any(|p| p == HOME_PATH));
}

#[test]
fn redirects_never_chain() {
    // A redirect target must render in the same auth state that produced it.
    for route in AppRoute::ALL {
        for authenticated in [false, true] {
            if let Some(target) = route.redirect(authenticated) {
                let landing = AppRoute::ALL
                    .into_iter()
                    .find(|r| format!("/{}", r.segment()) == target);
                assert_eq!(landing.and_then(|r| r.redirect(authenticated)), None);
            }
        }
    }
}

#[test]
fn segments_are_unique() {
    let mut segments: Vec<&str> = AppRoute::ALL.iter().map(|r| r.segment()).collect();
    segments.sort_unstable();
    segments.dedup();
    assert_eq!(segments.len(), AppRoute::ALL.len());
}

#[test]
fn path_constants_match_segments() {
    assert_eq!(format!("/{}", AppRoute::Login.segment()), LOGIN_PATH);
    assert_eq!(format!("/{}", AppRoute::Register.segment()), REGISTER_PATH);
    assert_eq!(format!("/{}", AppRoute::Dashboard.segment()), DASHBOARD_PATH);
    assert_eq!(wishlist_path("42"), "/wishlist/42");
}

#[test]
fn redirect_for_covers_access_matrix() {
    assert_eq!(redirect_for(Access::Public, false), None);
    assert_eq!(redirect_for(Access::Public, true), None);
    assert_eq!(redirect_for(Access::GuestOnly, false), None);
    assert_eq!(redirect_for(Access::GuestOnly, true), Some(DASHBOARD_PATH));
    assert_eq!(redirect_for(Access::Protected, false), Some(LOGIN_PATH));
    assert_eq!(redirect_for(Access::Protected, true), None);
}
