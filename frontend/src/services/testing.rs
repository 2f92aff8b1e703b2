//! Fakes for exercising the service clients without a browser.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::error::ServiceError;
use super::notifier::Notifier;
use super::transport::{ApiRequest, ApiResponse, Transport};

/// Records every request and answers from a script, in order. An exhausted
/// script answers with a network error.
#[derive(Default)]
pub struct RecordingTransport {
    pub requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ServiceError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, error: ServiceError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ServiceError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Network("no scripted response".to_string())))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, description: &str) {
        self.messages
            .borrow_mut()
            .push((title.to_string(), description.to_string()));
    }
}
