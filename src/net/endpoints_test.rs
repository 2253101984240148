use super::*;
use crate::net::request::Method;

fn assert_route(req: &ApiRequest, method: Method, path: &str) {
    assert_eq!(req.method, method, "method for {path}");
    assert_eq!(req.path, path);
}

#[test]
fn auth_endpoints_post_credentials() {
    let req = login(&LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() }).unwrap();
    assert_route(&req, Method::Post, "/auth/login");
    assert_eq!(req.body, Some(serde_json::json!({ "email": "a@b.com", "password": "pw" })));

    let req = register(&RegisterRequest {
        username: "ana".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
    })
    .unwrap();
    assert_route(&req, Method::Post, "/auth/register");
}

#[test]
fn read_only_auth_endpoints_are_gets() {
    assert_route(&all_users(), Method::Get, "/auth/all-users");
    assert_route(&notifications(), Method::Get, "/auth/notifications");
    assert_route(&me(), Method::Get, "/auth/me");
}

#[test]
fn find_user_includes_only_present_criteria() {
    let req = find_user(&UserQuery { email: Some("a@b.com".to_owned()), username: None });
    assert_route(&req, Method::Get, "/auth/find-user");
    assert_eq!(req.query, vec![("email".to_owned(), "a@b.com".to_owned())]);

    let req = find_user(&UserQuery { email: Some(String::new()), username: Some("ana".to_owned()) });
    assert_eq!(req.query, vec![("username".to_owned(), "ana".to_owned())]);
}

#[test]
fn wishlist_crud_paths() {
    assert_route(&list_wishlists(), Method::Get, "/wishlists");
    assert_route(&get_wishlist("42"), Method::Get, "/wishlists/42");
    assert_route(&delete_wishlist("42"), Method::Delete, "/wishlists/42");

    let input = WishlistInput { name: "Trip".to_owned(), description: None };
    assert_route(&create_wishlist(&input).unwrap(), Method::Post, "/wishlists");
    let req = update_wishlist("42", &input).unwrap();
    assert_route(&req, Method::Put, "/wishlists/42");
    assert_eq!(req.body, Some(serde_json::json!({ "name": "Trip" })));
}

#[test]
fn membership_endpoints() {
    let req = invite_member("w1", &InviteInput { email: Some("c@d.io".to_owned()), ..InviteInput::default() })
        .unwrap();
    assert_route(&req, Method::Post, "/wishlists/w1/invite");
    assert_eq!(req.body, Some(serde_json::json!({ "email": "c@d.io" })));

    let req = leave_wishlist("w1").unwrap();
    assert_route(&req, Method::Post, "/wishlists/w1/leave");
    assert_eq!(req.body, Some(serde_json::json!({})));

    let req = accept_invite("w1");
    assert_route(&req, Method::Post, "/wishlists/w1/accept-invite");
    assert_eq!(req.body, None);
}

#[test]
fn product_paths_nest_under_wishlist() {
    let input = ProductInput { name: "Lamp".to_owned(), ..ProductInput::default() };
    assert_route(&add_product("w1", &input).unwrap(), Method::Post, "/wishlists/w1/products");
    assert_route(&update_product("w1", "p2", &input).unwrap(), Method::Put, "/wishlists/w1/products/p2");
    assert_route(&delete_product("w1", "p2"), Method::Delete, "/wishlists/w1/products/p2");
}

#[test]
fn comment_and_reaction_paths() {
    let req = add_comment("w1", "p2", &CommentInput { text: "nice".to_owned() }).unwrap();
    assert_route(&req, Method::Post, "/wishlists/w1/products/p2/comments");
    assert_eq!(req.body, Some(serde_json::json!({ "text": "nice" })));

    let req = add_reaction("w1", "p2", &ReactionInput { emoji: "🎉".to_owned() }).unwrap();
    assert_route(&req, Method::Post, "/wishlists/w1/products/p2/reactions");
}
