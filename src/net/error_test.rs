use super::*;

#[test]
fn from_response_extracts_msg() {
    let err = ApiError::from_response(400, r#"{"msg":"Email already registered"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 400, message: Some("Email already registered".to_owned()) }
    );
    assert_eq!(err.server_message(), Some("Email already registered"));
}

#[test]
fn from_response_tolerates_non_json_body() {
    let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
}

#[test]
fn from_response_ignores_blank_msg() {
    let err = ApiError::from_response(400, r#"{"msg":"  "}"#);
    assert_eq!(err.server_message(), None);
}

#[test]
fn unauthorized_covers_401_and_403() {
    assert!(ApiError::from_response(401, "").is_unauthorized());
    assert!(ApiError::from_response(403, "").is_unauthorized());
    assert!(!ApiError::from_response(500, "").is_unauthorized());
    assert!(!ApiError::Transport("offline".to_owned()).is_unauthorized());
}

#[test]
fn non_status_errors_have_no_server_message() {
    assert_eq!(ApiError::Decode("eof".to_owned()).server_message(), None);
    assert_eq!(ApiError::Unavailable.server_message(), None);
}

#[test]
fn display_formats() {
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(
        ApiError::from_response(404, "").to_string(),
        "server responded with status 404"
    );
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}
