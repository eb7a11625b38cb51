use super::*;

fn decode(body: &str) -> ApiResponse {
    serde_json::from_str(body).expect("body should decode")
}

// =============================================================
// ApiResponse decoding
// =============================================================

#[test]
fn api_response_decodes_login_success() {
    let resp = decode(r#"{"success":true,"message":"Login successful","userId":12,"name":"Ada"}"#);
    assert!(resp.success);
    assert_eq!(resp.message(), Some("Login successful"));
    assert_eq!(resp.display_name(), "Ada");
}

#[test]
fn api_response_tolerates_missing_fields() {
    let resp = decode("{}");
    assert_eq!(resp, ApiResponse::default());
    assert!(!resp.success);
    assert_eq!(resp.message(), None);
    assert_eq!(resp.display_name(), "User");
}

#[test]
fn api_response_treats_null_and_empty_as_missing() {
    let resp = decode(r#"{"success":false,"message":"","name":null}"#);
    assert_eq!(resp.message(), None);
    assert_eq!(resp.display_name(), "User");

    let resp = decode(r#"{"success":true,"name":""}"#);
    assert_eq!(resp.display_name(), "User");
}

#[test]
fn api_response_ignores_unknown_fields() {
    let resp = decode(r#"{"success":false,"message":"Invalid credentials","extra":[1,2]}"#);
    assert_eq!(resp.message(), Some("Invalid credentials"));
}

#[test]
fn api_response_accepts_non_numeric_user_id() {
    let resp = decode(r#"{"success":true,"name":"Ada","userId":"u-1"}"#);
    assert!(resp.success);
    assert_eq!(resp.display_name(), "Ada");
}

#[test]
fn api_response_null_success_is_failure() {
    let resp = decode(r#"{"success":null,"message":"Invalid credentials"}"#);
    assert!(!resp.success);
    assert_eq!(resp.message(), Some("Invalid credentials"));
}

#[test]
fn api_response_non_bool_success_is_failure() {
    for body in [
        r#"{"success":"true"}"#,
        r#"{"success":1}"#,
        r#"{"success":{"ok":true}}"#,
    ] {
        assert!(!decode(body).success, "{body}");
    }
}

#[test]
fn api_response_drops_non_string_text_fields() {
    let resp = decode(r#"{"success":true,"message":42,"name":["Ada"]}"#);
    assert!(resp.success);
    assert_eq!(resp.message(), None);
    assert_eq!(resp.display_name(), "User");
}

#[test]
fn api_response_rejects_non_object_body() {
    assert!(serde_json::from_str::<ApiResponse>("\"oops\"").is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn register_request_serializes_expected_shape() {
    let req = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serializable");
    assert_eq!(
        value,
        serde_json::json!({ "name": "Ada", "email": "ada@example.com", "password": "hunter2" })
    );
}

#[test]
fn login_request_serializes_expected_shape() {
    let req = LoginRequest {
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serializable");
    assert_eq!(
        value,
        serde_json::json!({ "email": "ada@example.com", "password": "hunter2" })
    );
}
