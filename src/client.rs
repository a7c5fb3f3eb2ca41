use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{ApiError, ConfigError};

const FREE_SLOTS_PATH: &str = "/free-slots";
const CREATE_EVENT_PATH: &str = "/create-event";
const AUTHORIZE_PATH: &str = "/authorize";

// Request body for the find-slots endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlotsRequest {
    pub prompt: String,
}

// Request body for the create-event endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub prompt: String,
    pub attendees: Vec<String>,
}

/// Success body of create-event. Only its existence matters; known fields are kept for logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "htmlLink")]
    pub html_link: Option<String>,
    #[serde(flatten)]
    pub extra_fields: HashMap<String, Value>,
}

// Failure body of create-event
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// The two backend operations the assistant depends on
#[async_trait]
pub trait SchedulerApi: Send + Sync {
    /// Ask the backend for free slots; returns the raw plain-text body
    async fn find_free_slots(&self, prompt: &str) -> Result<String, ApiError>;

    /// Ask the backend to create a calendar event
    async fn create_event(&self, request: &CreateEventRequest) -> Result<CreatedEvent, ApiError>;
}

/// HTTP client for the scheduling backend
pub struct SchedulerClient {
    client: Client,
    base_url: String,
}

impl SchedulerClient {
    /// Create a client whose every request is bounded by the configured timeout
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Navigation target for the login flow
    pub fn authorize_url(&self) -> String {
        format!("{}{}", self.base_url, AUTHORIZE_PATH)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SchedulerApi for SchedulerClient {
    async fn find_free_slots(&self, prompt: &str) -> Result<String, ApiError> {
        let url = self.url(FREE_SLOTS_PATH);
        info!("Requesting free slots");
        debug!("API URL: {}, prompt: {:?}", url, prompt);

        let res = self
            .client
            .post(&url)
            .json(&FreeSlotsRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;
        let status = res.status();
        info!("Free slots response received with status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let body = res.text().await?;
        if !status.is_success() {
            warn!("Free slots request failed with status {}: {}", status, body);
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Free slots body is {} bytes", body.len());
        Ok(body)
    }

    async fn create_event(&self, request: &CreateEventRequest) -> Result<CreatedEvent, ApiError> {
        let url = self.url(CREATE_EVENT_PATH);
        info!(
            "Creating event with {} attendee(s)",
            request.attendees.len()
        );
        debug!("API URL: {}, prompt: {:?}", url, request.prompt);

        let res = self.client.post(&url).json(request).send().await?;
        let status = res.status();
        info!("Create event response received with status: {}", status);

        let body = res.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("Failed to create event (status {})", status.as_u16()));
            warn!("Create event rejected: {}", message);
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        // Only success matters; tolerate empty or non-object bodies
        let event = match serde_json::from_str::<CreatedEvent>(&body) {
            Ok(event) => event,
            Err(e) => {
                debug!("Create event body not decoded ({}), continuing", e);
                CreatedEvent::default()
            }
        };

        if let Some(id) = &event.id {
            info!("Successfully created event with ID: {}", id);
        }
        Ok(event)
    }
}
