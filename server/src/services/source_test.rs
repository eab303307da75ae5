use super::*;

#[test]
fn error_codes_are_stable() {
    assert_eq!(SourceError::InvalidRequest("x".into()).error_code(), "E_INVALID_REQUEST");
    assert_eq!(SourceError::UnknownBot("bot9".into()).error_code(), "E_UNKNOWN_BOT");
    assert_eq!(SourceError::Transport("refused".into()).error_code(), "E_UPSTREAM_REQUEST");
    assert_eq!(SourceError::Upstream { status: 500, body: String::new() }.error_code(), "E_UPSTREAM_RESPONSE");
    assert_eq!(SourceError::Decode("eof".into()).error_code(), "E_UPSTREAM_PARSE");
    assert_eq!(SourceError::HttpClientBuild("tls".into()).error_code(), "E_HTTP_CLIENT_BUILD");
}

#[test]
fn retryable_covers_transport_and_server_errors() {
    assert!(SourceError::Transport("timeout".into()).retryable());
    assert!(SourceError::Upstream { status: 503, body: String::new() }.retryable());
    assert!(SourceError::Upstream { status: 429, body: String::new() }.retryable());
    assert!(!SourceError::Upstream { status: 404, body: String::new() }.retryable());
    assert!(!SourceError::UnknownBot("bot9".into()).retryable());
}

#[test]
fn display_names_the_bot() {
    assert_eq!(SourceError::UnknownBot("bot9".into()).to_string(), "unknown bot: bot9");
}

#[test]
fn require_bot_id_trims_and_rejects_blank() {
    assert_eq!(require_bot_id(" bot1 ").unwrap(), "bot1");
    assert!(matches!(require_bot_id(""), Err(SourceError::InvalidRequest(_))));
    assert!(matches!(require_bot_id("   "), Err(SourceError::InvalidRequest(_))));
}
