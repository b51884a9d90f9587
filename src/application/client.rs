/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::auth::Token;
use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::message::MessageService;
use crate::application::interfaces::project::ProjectService;
use crate::application::paginator::Paginator;
use crate::constants::USER_ONLINE_URL;
use crate::error::AppError;
use crate::model::http::{HttpClient, Transport};
use crate::model::requests::{ProjectsRequest, RequestDescriptor};
use crate::model::responses::{ApiResponse, decode_records};
use crate::presentation::account::{Actor, User};
use crate::presentation::dialog::{DialogMessage, InboxMessage};
use crate::presentation::project::{Category, Connects, WantWorker};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the Kwork API
///
/// A client is one session: it signs in lazily on the first authenticated
/// call, shares one token across concurrent calls and releases its
/// connections on [`Client::close`] or when dropped.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client talking to the live service
    ///
    /// # Errors
    /// Returns [`AppError::Config`] if the proxy URL is invalid
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self::from_http_client(HttpClient::new(config)?))
    }

    /// Creates a client on top of a custom transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self::from_http_client(HttpClient::with_transport(config, transport))
    }

    /// Wraps an already configured executor
    pub fn from_http_client(http_client: HttpClient) -> Self {
        Self {
            http_client: Arc::new(http_client),
        }
    }

    /// Request executor used by this client
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Paginator over this client's session
    pub fn paginator(&self) -> Paginator<'_> {
        Paginator::new(&self.http_client)
    }

    /// Returns the session token, signing in if needed
    ///
    /// # Errors
    /// Returns the sign-in failure
    pub async fn token(&self) -> Result<Token, AppError> {
        self.http_client.token().await
    }

    /// Executes an arbitrary request
    ///
    /// # Errors
    /// See [`HttpClient::execute`]
    pub async fn request(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse, AppError> {
        self.http_client.execute(descriptor).await
    }

    /// Closes the session. Further requests fail with [`AppError::Connection`].
    pub async fn close(&self) {
        self.http_client.close().await;
    }

    /// Whether the session has been closed
    pub fn is_closed(&self) -> bool {
        self.http_client.is_closed()
    }

    async fn payload(&self, descriptor: RequestDescriptor) -> Result<Value, AppError> {
        Ok(self.request(&descriptor).await?.response)
    }
}

#[async_trait]
impl AccountService for Client {
    async fn get_me(&self) -> Result<Actor, AppError> {
        info!("Getting account information");
        let actor: Actor = self.request(&RequestDescriptor::post("actor")).await?.decode()?;
        debug!("Account information obtained for: {:?}", actor.username);
        Ok(actor)
    }

    async fn get_user(&self, user_id: u64) -> Result<User, AppError> {
        let descriptor = RequestDescriptor::post("user").param("id", user_id);
        self.request(&descriptor).await?.decode()
    }

    async fn set_offline(&self) -> Result<Value, AppError> {
        self.payload(RequestDescriptor::post("offline")).await
    }

    async fn set_online(&self) -> Result<Value, AppError> {
        self.payload(RequestDescriptor::post_url(USER_ONLINE_URL))
            .await
    }

    async fn get_worker_orders(&self) -> Result<Value, AppError> {
        self.payload(RequestDescriptor::post("workerOrders").param("filter", "all"))
            .await
    }

    async fn get_payer_orders(&self) -> Result<Value, AppError> {
        self.payload(RequestDescriptor::post("payerOrders").param("filter", "all"))
            .await
    }

    async fn get_notifications(&self) -> Result<Value, AppError> {
        self.payload(RequestDescriptor::post("notifications")).await
    }

    async fn get_channel(&self) -> Result<String, AppError> {
        let channel = match self.payload(RequestDescriptor::post("getChannel")).await? {
            Value::Object(mut payload) => payload.remove("channel").unwrap_or(Value::Null),
            other => other,
        };
        Ok(serde_json::from_value(channel)?)
    }
}

#[async_trait]
impl MessageService for Client {
    async fn get_all_dialogs(&self) -> Result<Vec<DialogMessage>, AppError> {
        info!("Getting all dialogs");
        let template = RequestDescriptor::post("dialogs").param("filter", "all");
        let records = self.paginator().fetch_sequential(&template).await?;
        debug!("{} dialogs obtained", records.len());
        decode_records(records)
    }

    async fn get_dialog_with_user(&self, username: &str) -> Result<Vec<InboxMessage>, AppError> {
        info!("Getting dialog with user: {}", username);
        let template = RequestDescriptor::post("inboxes").param("username", username);
        let records = self.paginator().fetch_all(&template).await?;
        debug!("{} messages obtained from dialog with {}", records.len(), username);
        decode_records(records)
    }

    async fn send_message(&self, user_id: u64, text: &str) -> Result<Value, AppError> {
        if user_id == 0 {
            return Err(AppError::Validation("recipient id is required".to_string()));
        }
        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "message text cannot be empty".to_string(),
            ));
        }

        let descriptor = RequestDescriptor::post("inboxCreate")
            .param("user_id", user_id)
            .param("text", text);
        let payload = self.payload(descriptor).await?;
        info!("Message sent to user {}", user_id);
        Ok(payload)
    }

    async fn delete_message(&self, message_id: u64) -> Result<Value, AppError> {
        self.payload(RequestDescriptor::post("inboxDelete").param("id", message_id))
            .await
    }

    async fn set_typing(&self, recipient_id: u64) -> Result<Value, AppError> {
        self.payload(RequestDescriptor::post("typing").param("recipientId", recipient_id))
            .await
    }
}

#[async_trait]
impl ProjectService for Client {
    async fn get_categories(&self) -> Result<Vec<Category>, AppError> {
        let descriptor = RequestDescriptor::post("categories").param("type", 1);
        self.request(&descriptor).await?.decode_records()
    }

    async fn get_connects(&self) -> Result<Connects, AppError> {
        let descriptor = RequestDescriptor::post("projects").param("categories", "");
        let response = self.request(&descriptor).await?;
        match response.field("connects") {
            Some(connects) => Ok(serde_json::from_value(connects.clone())?),
            None => {
                warn!("Response of projects carries no connects");
                Ok(Connects::default())
            }
        }
    }

    async fn get_projects(&self, request: &ProjectsRequest) -> Result<Vec<WantWorker>, AppError> {
        let template = request.to_descriptor()?;
        let records = match request.page {
            Some(page) => self.request(&template.with_page(page)).await?.into_records(),
            None => self.paginator().fetch_all(&template).await?,
        };
        debug!("{} projects obtained", records.len());
        decode_records(records)
    }
}
