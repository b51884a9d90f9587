// Integration tests for account endpoints. They talk to the live service and
// need KWORK_LOGIN and KWORK_PASSWORD.

use crate::common;
use kwork_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_get_me() {
    let client = common::create_test_client();

    let actor = client.get_me().await.expect("Failed to get actor");
    assert!(actor.id.is_some(), "Actor should have an id");
    info!("Signed in as {:?}", actor.username);

    client.close().await;
}

#[tokio::test]
#[ignore]
async fn test_get_user_and_channel() {
    let client = common::create_test_client();

    let me = client.get_me().await.expect("Failed to get actor");
    let id = me.id.expect("Actor should have an id") as u64;
    let user = client.get_user(id).await.expect("Failed to get user");
    assert_eq!(user.id, me.id);

    let channel = client.get_channel().await.expect("Failed to get channel");
    assert!(!channel.is_empty());
    info!("Channel: {channel}");

    client.close().await;
}

#[tokio::test]
#[ignore]
async fn test_token_survives_many_calls() {
    let client = common::create_test_client();

    let first = client.token().await.expect("Failed to sign in");
    client.get_notifications().await.expect("Failed to get notifications");
    let second = client.token().await.expect("Failed to read token");
    assert_eq!(first, second);

    client.close().await;
}
