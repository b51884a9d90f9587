// Integration tests for the project exchange. Read only.

use crate::common;
use kwork_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_categories_and_projects() {
    let client = common::create_test_client();

    let categories = client.get_categories().await.expect("Failed to get categories");
    assert!(!categories.is_empty(), "Should return at least one category");

    let ids: Vec<u64> = categories
        .iter()
        .flat_map(|c| c.subcategory_ids())
        .take(2)
        .collect();
    let projects = client
        .get_projects(&ProjectsRequest::new(ids))
        .await
        .expect("Failed to get projects");
    info!("Retrieved {} projects", projects.len());

    let connects = client.get_connects().await.expect("Failed to get connects");
    info!("Connects: {}", connects);

    client.close().await;
}
