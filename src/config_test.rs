use super::*;

#[test]
fn resolve_base_url_defaults_when_unset() {
    assert_eq!(resolve_base_url(None), "/api");
}

#[test]
fn resolve_base_url_defaults_when_blank() {
    assert_eq!(resolve_base_url(Some("   ")), "/api");
}

#[test]
fn resolve_base_url_trims_whitespace_and_trailing_slashes() {
    assert_eq!(
        resolve_base_url(Some(" https://wishes.example.com/api// ")),
        "https://wishes.example.com/api"
    );
}

#[test]
fn resolve_base_url_keeps_host_only_urls() {
    assert_eq!(resolve_base_url(Some("http://localhost:5000")), "http://localhost:5000");
}

#[test]
fn api_base_url_is_normalized() {
    let url = api_base_url();
    assert!(!url.is_empty());
    assert!(!url.ends_with('/'));
}
