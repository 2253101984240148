use super::*;

#[test]
fn status_message_prefers_json_message_field() {
    assert_eq!(status_message(400, r#"{"message":"Email taken"}"#), "Email taken");
}

#[test]
fn status_message_falls_back_to_error_field() {
    assert_eq!(status_message(403, r#"{"error":"Not a member"}"#), "Not a member");
}

#[test]
fn status_message_uses_plain_text_body() {
    assert_eq!(status_message(500, "  boom \n"), "boom");
}

#[test]
fn status_message_uses_canonical_reason_for_empty_or_unhelpful_body() {
    assert_eq!(status_message(404, ""), "Not found");
    assert_eq!(status_message(401, r#"{"ok":false}"#), "Not signed in");
    assert_eq!(status_message(418, ""), "Request failed");
}

#[test]
fn category_maps_status_ranges() {
    assert_eq!(ApiError::from_response(400, "").category(), ErrorCategory::Validation);
    assert_eq!(ApiError::from_response(422, "").category(), ErrorCategory::Validation);
    assert_eq!(ApiError::from_response(401, "").category(), ErrorCategory::Auth);
    assert_eq!(ApiError::from_response(403, "").category(), ErrorCategory::Auth);
    assert_eq!(ApiError::from_response(404, "").category(), ErrorCategory::NotFound);
    assert_eq!(ApiError::from_response(409, "").category(), ErrorCategory::Conflict);
    assert_eq!(ApiError::from_response(503, "").category(), ErrorCategory::Server);
    assert_eq!(ApiError::from_response(418, "").category(), ErrorCategory::Client);
    assert_eq!(ApiError::Network("reset".to_owned()).category(), ErrorCategory::Network);
    assert_eq!(ApiError::Unavailable.category(), ErrorCategory::Client);
}

#[test]
fn is_unauthorized_only_for_401() {
    assert!(ApiError::from_response(401, "").is_unauthorized());
    assert!(!ApiError::from_response(403, "").is_unauthorized());
    assert!(!ApiError::Network("x".to_owned()).is_unauthorized());
}

#[test]
fn display_includes_status_and_message() {
    let err = ApiError::from_response(400, r#"{"message":"Name required"}"#);
    assert_eq!(err.to_string(), "request failed (400): Name required");
    assert_eq!(err.user_message(), "Name required");
}

#[test]
fn network_user_message_is_generic() {
    let err = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.user_message(), "Could not reach the server. Check your connection.");
}

#[test]
fn user_message_follows_category() {
    let server = ApiError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(server.user_message(), "The server had a problem. Try again shortly.");

    let forbidden = ApiError::from_response(403, r#"{"message":"Not a member"}"#);
    assert_eq!(forbidden.user_message(), "You don't have permission to do that.");

    let rejected = ApiError::from_response(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(rejected.user_message(), "Invalid credentials");
}

#[test]
fn user_message_keeps_backend_wording_for_request_problems() {
    let missing = ApiError::from_response(404, r#"{"message":"User not found"}"#);
    assert_eq!(missing.user_message(), "User not found");

    let taken = ApiError::from_response(409, r#"{"error":"Email already registered"}"#);
    assert_eq!(taken.user_message(), "Email already registered");

    let teapot = ApiError::from_response(418, "");
    assert_eq!(teapot.user_message(), "Request failed");
}

#[test]
fn user_message_describes_local_failures() {
    let decode = ApiError::Decode("expected value".to_owned());
    assert_eq!(decode.user_message(), decode.to_string());
    assert_eq!(ApiError::Unavailable.user_message(), ApiError::Unavailable.to_string());
}
