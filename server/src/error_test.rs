use super::*;

#[derive(Debug)]
struct NotFound;

impl std::fmt::Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "thing not found")
    }
}

impl ErrorCode for NotFound {
    fn error_code(&self) -> &'static str {
        "E_NOT_FOUND"
    }
}

#[test]
fn retryable_defaults_to_false() {
    assert!(!NotFound.retryable());
}

#[test]
fn body_carries_code_and_message() {
    let body = ErrorBody::from_error(&NotFound);
    assert_eq!(body.error, "E_NOT_FOUND");
    assert_eq!(body.message, "thing not found");

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"error": "E_NOT_FOUND", "message": "thing not found"}));
}
