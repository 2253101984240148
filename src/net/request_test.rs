use super::*;

#[test]
fn build_url_joins_base_and_path() {
    assert_eq!(build_url("https://api.test", "/wishlists/42", &[]), "https://api.test/wishlists/42");
}

#[test]
fn build_url_percent_encodes_query_values() {
    let query = vec![("email".to_owned(), "a@b.com".to_owned())];
    assert_eq!(
        build_url("https://api.test", "/auth/find-user", &query),
        "https://api.test/auth/find-user?email=a%40b.com"
    );
}

#[test]
fn build_url_keeps_query_order() {
    let query = vec![
        ("email".to_owned(), "a@b.com".to_owned()),
        ("username".to_owned(), "ana b".to_owned()),
    ];
    assert_eq!(build_url("", "/x", &query), "/x?email=a%40b.com&username=ana+b");
}

#[test]
fn query_skips_absent_and_empty_values() {
    let req = ApiRequest::get("/auth/find-user")
        .query("email", None)
        .query("username", Some(""))
        .query("username", Some("ana"));
    assert_eq!(req.query, vec![("username".to_owned(), "ana".to_owned())]);
}

#[test]
fn json_attaches_serialized_body() {
    let req = ApiRequest::post("/wishlists")
        .json(&serde_json::json!({ "name": "Trip" }))
        .unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, Some(serde_json::json!({ "name": "Trip" })));
}

#[test]
fn method_display_is_uppercase() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn prepared_header_lookup_is_case_insensitive() {
    let prepared = PreparedRequest {
        method: Method::Get,
        url: "/x".to_owned(),
        headers: vec![("Authorization", "Bearer t".to_owned())],
        body: None,
    };
    assert_eq!(prepared.header("authorization"), Some("Bearer t"));
    assert_eq!(prepared.header("content-type"), None);
}
