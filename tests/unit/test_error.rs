use kwork_client::error::AppError;
use kwork_client::model::classifier::ErrorKind;
use kwork_client::model::requests::RequestContext;
use reqwest::Method;

fn context() -> RequestContext {
    RequestContext::new(
        &Method::POST,
        "https://api.kwork.ru/actor",
        &[("token".to_string(), "abc".to_string())],
    )
}

#[test]
fn test_app_error_display_validation() {
    let error = AppError::Validation("categories cannot be empty".to_string());
    assert_eq!(
        error.to_string(),
        "validation error: categories cannot be empty"
    );
}

#[test]
fn test_app_error_display_api_with_code() {
    let error = AppError::from_kind(
        ErrorKind::Generic,
        "User not found".to_string(),
        Some(404),
        context(),
    );
    assert_eq!(
        error.to_string(),
        "api error: User not found (code 404) [POST https://api.kwork.ru/actor {token: ***}]"
    );
}

#[test]
fn test_app_error_display_without_code() {
    let error = AppError::from_kind(ErrorKind::Auth, "Invalid token".to_string(), None, context());
    assert_eq!(
        error.to_string(),
        "authentication error: Invalid token [POST https://api.kwork.ru/actor {token: ***}]"
    );
}

#[test]
fn test_from_kind_maps_every_kind() {
    for kind in [ErrorKind::RateLimit, ErrorKind::Auth, ErrorKind::Generic] {
        let error = AppError::from_kind(kind, "message".to_string(), None, context());
        assert_eq!(error.kind(), Some(kind));
        assert_eq!(error.context(), Some(&context()));
    }
    assert!(AppError::from_kind(ErrorKind::Auth, String::new(), None, context()).is_retryable_auth());
    assert!(
        !AppError::from_kind(ErrorKind::RateLimit, String::new(), None, context())
            .is_retryable_auth()
    );
}

#[test]
fn test_app_error_display_protocol() {
    let error = AppError::Protocol {
        message: "unexpected content type text/html: <html>".to_string(),
        status: 502,
        context: context(),
    };
    assert!(error.to_string().starts_with("protocol error (HTTP 502)"));
    assert_eq!(error.kind(), None);
    assert_eq!(error.code(), None);
}

#[test]
fn test_app_error_from_serde_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.context().is_none());
}

#[test]
fn test_connection_error_exposes_source() {
    use std::error::Error;

    let error = AppError::Connection {
        message: "connection reset".to_string(),
        context: context(),
        source: Some("connection reset".into()),
    };
    assert!(error.source().is_some());
}
