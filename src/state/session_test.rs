use super::*;

#[test]
fn empty_session_is_unauthenticated() {
    let session = Session::in_memory();
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn sign_in_then_sign_out_round_trips_authentication() {
    let session = Session::in_memory();
    session.sign_in("tok-1");
    assert_eq!(session.token().as_deref(), Some("tok-1"));
    assert!(session.is_authenticated());

    session.sign_out();
    assert!(!session.is_authenticated());
}

#[test]
fn blank_stored_token_counts_as_absent() {
    let session = Session::new(Arc::new(MemoryTokenStore::with_token("  ")));
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn sign_in_ignores_blank_token() {
    let session = Session::new(Arc::new(MemoryTokenStore::with_token("kept")));
    session.sign_in("");
    assert_eq!(session.token().as_deref(), Some("kept"));
}

#[test]
fn clones_share_the_same_store() {
    let session = Session::in_memory();
    let other = session.clone();
    session.sign_in("shared");
    assert_eq!(other.token().as_deref(), Some("shared"));
    other.sign_out();
    assert!(!session.is_authenticated());
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_store_is_inert_without_browser() {
    let session = Session::local();
    session.sign_in("ignored");
    assert!(!session.is_authenticated());
}

#[test]
fn debug_output_never_contains_token() {
    let session = Session::new(Arc::new(MemoryTokenStore::with_token("secret-value")));
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("secret-value"));
    assert!(rendered.contains("authenticated: true"));
}
