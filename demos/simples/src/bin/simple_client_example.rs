use kwork_client::application::client::Client;
use kwork_client::application::config::Config;
use kwork_client::application::interfaces::account::AccountService;
use kwork_client::application::interfaces::message::MessageService;
use kwork_client::application::interfaces::project::ProjectService;
use kwork_client::model::requests::ProjectsRequest;
use kwork_client::utils::setup_logger;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple client example");

    // Credentials come from KWORK_LOGIN / KWORK_PASSWORD or a .env file
    let client = Client::new(Config::new())?;

    let me = client.get_me().await?;
    info!("Signed in as {:?}", me.username);

    let dialogs = client.get_all_dialogs().await?;
    info!("{} dialogs", dialogs.len());
    for dialog in dialogs.iter().take(5) {
        info!(
            "{:?}: {:?} unread",
            dialog.username, dialog.unread_count
        );
    }

    let categories = client.get_categories().await?;
    let ids: Vec<u64> = categories
        .iter()
        .flat_map(|category| category.subcategory_ids())
        .take(3)
        .collect();
    if ids.is_empty() {
        warn!("No categories returned");
    } else {
        let projects = client
            .get_projects(&ProjectsRequest::new(ids).price_range(Some(1000), None))
            .await?;
        info!("{} projects found", projects.len());
        for project in projects.iter().take(5) {
            info!("{:?} - {:?}", project.title, project.price);
        }
    }

    let connects = client.get_connects().await?;
    info!("Connects: {}", connects);

    client.close().await;
    Ok(())
}
