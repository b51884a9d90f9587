use crate::common::*;
use kwork_client::constants::MAX_PAGES;
use kwork_client::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

fn ids(records: &[Value]) -> Vec<i64> {
    records.iter().filter_map(|r| r["id"].as_i64()).collect()
}

fn template() -> RequestDescriptor {
    RequestDescriptor::post("inboxes").param("username", "buyer")
}

#[tokio::test]
async fn test_missing_paging_means_single_request() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.script("inboxes", vec![ok(json!([{"id": 1}, {"id": 2}]))]);
    let client = client(&transport);

    let records = client.paginator().fetch_all(&template()).await.unwrap();

    assert_eq!(ids(&records), vec![1, 2]);
    assert_eq!(transport.calls_to("inboxes"), 1);
}

#[tokio::test]
async fn test_single_page_means_single_request() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.script("inboxes", vec![page(json!([{"id": 1}]), 1)]);
    let client = client(&transport);

    let records = client.paginator().fetch_all(&template()).await.unwrap();

    assert_eq!(ids(&records), vec![1]);
    assert_eq!(transport.calls_to("inboxes"), 1);
    assert_eq!(
        param(&transport.requests_to("inboxes")[0], "page"),
        Some("1")
    );
}

#[tokio::test]
async fn test_failed_page_is_skipped_and_order_kept() {
    let transport = Arc::new(ScriptedTransport::new());
    transport
        .script("inboxes?page=1", vec![page(json!([{"id": 1}, {"id": 2}]), 5)])
        .script("inboxes?page=2", vec![page(json!([{"id": 3}]), 5)])
        .script("inboxes?page=3", vec![api_error("Internal error")])
        .script("inboxes?page=4", vec![page(json!([{"id": 5}, {"id": 6}]), 5)])
        .script("inboxes?page=5", vec![page(json!([{"id": 7}]), 5)]);
    let client = client(&transport);

    let records = client.paginator().fetch_all(&template()).await.unwrap();

    assert_eq!(ids(&records), vec![1, 2, 3, 5, 6, 7]);
    assert_eq!(transport.calls_to("inboxes"), 5);
    let mut pages: Vec<String> = transport
        .requests_to("inboxes")
        .iter()
        .filter_map(|r| param(r, "page").map(str::to_string))
        .collect();
    pages.sort();
    assert_eq!(pages, vec!["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn test_network_failure_on_later_page_is_skipped() {
    let transport = Arc::new(ScriptedTransport::new());
    transport
        .script("inboxes?page=1", vec![page(json!([{"id": 1}]), 3)])
        .script("inboxes?page=2", vec![network_error("timed out")])
        .script("inboxes?page=3", vec![page(json!([{"id": 3}]), 3)]);
    let client = client(&transport);

    let records = client.paginator().fetch_all(&template()).await.unwrap();

    assert_eq!(ids(&records), vec![1, 3]);
}

#[tokio::test]
async fn test_first_page_failure_propagates() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.script("inboxes", vec![api_error("Dialog not found")]);
    let client = client(&transport);

    let err = client.paginator().fetch_all(&template()).await.unwrap_err();

    assert!(matches!(err, AppError::Api { .. }));
    assert_eq!(transport.calls_to("inboxes"), 1);
}

#[tokio::test]
async fn test_stale_token_across_pages_is_refreshed_once() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.script("inboxes?page=1", vec![page(json!([{"id": 1}]), 4)]);
    for n in 2..=4 {
        transport.script(
            &format!("inboxes?page={n}"),
            vec![api_error("Invalid token"), page(json!([{"id": n}]), 4)],
        );
    }
    let client = client(&transport);

    let records = client.paginator().fetch_all(&template()).await.unwrap();

    assert_eq!(ids(&records), vec![1, 2, 3, 4]);
    assert_eq!(transport.calls_to("signIn"), 2);
    assert_eq!(transport.calls_to("inboxes"), 7);
}

#[tokio::test]
async fn test_non_list_payload_contributes_nothing() {
    let transport = Arc::new(ScriptedTransport::new());
    transport
        .script("inboxes?page=1", vec![page(json!([{"id": 1}]), 2)])
        .script("inboxes?page=2", vec![page(json!({"unexpected": true}), 2)]);
    let client = client(&transport);

    let records = client.paginator().fetch_all(&template()).await.unwrap();

    assert_eq!(ids(&records), vec![1]);
}

#[tokio::test]
async fn test_sequential_stops_at_first_empty_page() {
    let transport = Arc::new(ScriptedTransport::new());
    transport
        .script("dialogs?page=1", vec![ok(json!([{"id": 1}, {"id": 2}, {"id": 3}]))])
        .script("dialogs?page=2", vec![ok(json!([{"id": 4}, {"id": 5}]))])
        .script("dialogs?page=3", vec![ok(json!([]))]);
    let client = client(&transport);

    let records = client
        .paginator()
        .fetch_sequential(&RequestDescriptor::post("dialogs"))
        .await
        .unwrap();

    assert_eq!(ids(&records), vec![1, 2, 3, 4, 5]);
    assert_eq!(transport.calls_to("dialogs"), 3);
    let pages: Vec<String> = transport
        .requests_to("dialogs")
        .iter()
        .filter_map(|r| param(r, "page").map(str::to_string))
        .collect();
    assert_eq!(pages, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_sequential_error_propagates() {
    let transport = Arc::new(ScriptedTransport::new());
    transport
        .script("dialogs?page=1", vec![ok(json!([{"id": 1}]))])
        .script("dialogs?page=2", vec![api_error("Request limit exceeded")]);
    let client = client(&transport);

    let err = client
        .paginator()
        .fetch_sequential(&RequestDescriptor::post("dialogs"))
        .await
        .unwrap_err();

    assert!(err.is_rate_limit());
    assert_eq!(transport.calls_to("dialogs"), 2);
}

#[tokio::test]
async fn test_reported_page_count_is_capped() {
    let transport = Arc::new(ScriptedTransport::new());
    transport
        .script("inboxes?page=1", vec![page(json!([{"id": 1}]), u32::MAX)])
        .script("inboxes", vec![page(json!([]), u32::MAX)]);
    let config = config().with_rate_limiter(RateLimiterConfig {
        max_requests: 10_000,
        period_seconds: 1,
        burst_size: 10_000,
    });
    let client = Client::with_transport(config, transport.clone());

    let records = client.paginator().fetch_all(&template()).await.unwrap();

    assert_eq!(ids(&records), vec![1]);
    assert_eq!(transport.calls_to("inboxes"), MAX_PAGES as usize);
    let last_page = transport
        .requests_to("inboxes")
        .iter()
        .filter_map(|r| param(r, "page").and_then(|p| p.parse::<u32>().ok()))
        .max();
    assert_eq!(last_page, Some(MAX_PAGES));
}
