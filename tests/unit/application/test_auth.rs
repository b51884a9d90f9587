use crate::common::*;
use futures_util::future::join_all;
use kwork_client::prelude::*;
use std::sync::Arc;

#[tokio::test]
async fn test_token_is_cached_between_calls() {
    let transport = Arc::new(ScriptedTransport::new());
    let client = client(&transport);

    let first = client.token().await.unwrap();
    let second = client.token().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(transport.calls_to("signIn"), 1);
}

#[tokio::test]
async fn test_concurrent_token_requests_share_one_sign_in() {
    let transport = Arc::new(ScriptedTransport::new());
    let client = client(&transport);

    let tokens = join_all((0..10).map(|_| client.token())).await;

    assert_eq!(transport.calls_to("signIn"), 1);
    assert!(tokens.iter().all(|t| t.as_ref().unwrap().as_str() == "token-1"));
}

#[tokio::test]
async fn test_invalidated_token_triggers_new_sign_in() {
    let transport = Arc::new(ScriptedTransport::new());
    let client = client(&transport);

    client.token().await.unwrap();
    client.http_client().invalidate_token().await;
    let token = client.token().await.unwrap();

    assert_eq!(token.as_str(), "token-2");
    assert_eq!(transport.calls_to("signIn"), 2);
}

#[tokio::test]
async fn test_failed_sign_in_is_retried_on_next_call() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.script("signIn", vec![network_error("connection refused")]);
    let client = client(&transport);

    assert!(client.token().await.is_err());
    assert!(client.token().await.is_err());
    assert_eq!(transport.calls_to("signIn"), 2);
}

#[test]
fn test_token_debug_is_redacted() {
    let token = Token::new("secret-token");
    assert_eq!(format!("{token:?}"), "Token(***)");
}
