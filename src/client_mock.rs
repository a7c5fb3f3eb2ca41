use async_trait::async_trait;
use mockall::mock;
use std::sync::{Arc, Mutex};

use crate::client::{CreateEventRequest, CreatedEvent, SchedulerApi};
use crate::error::ApiError;

// Define a mock client for the scheduling backend
mock! {
    pub SchedulerClient {}

    #[async_trait]
    impl SchedulerApi for SchedulerClient {
        async fn find_free_slots(&self, prompt: &str) -> Result<String, ApiError>;

        async fn create_event(
            &self,
            request: &CreateEventRequest,
        ) -> Result<CreatedEvent, ApiError>;
    }
}

// Records every create-event request the mock receives
#[derive(Default)]
pub struct RequestLog {
    requests: Mutex<Vec<CreateEventRequest>>,
}

impl RequestLog {
    pub fn record(&self, request: &CreateEventRequest) {
        self.requests.lock().unwrap().push(request.clone());
    }

    pub fn all(&self) -> Vec<CreateEventRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Mock whose find-slots call returns `body` and whose create-event call succeeds
pub fn setup_mock_client(body: &str) -> (MockSchedulerClient, Arc<RequestLog>) {
    let log = Arc::new(RequestLog::default());
    let mut mock_client = MockSchedulerClient::new();

    let body = body.to_string();
    mock_client
        .expect_find_free_slots()
        .returning(move |_| Ok(body.clone()));

    let log_ref = Arc::clone(&log);
    mock_client.expect_create_event().returning(move |request| {
        log_ref.record(request);
        Ok(CreatedEvent {
            id: Some(format!("evt_{}", log_ref.all().len())),
            ..CreatedEvent::default()
        })
    });

    (mock_client, log)
}
