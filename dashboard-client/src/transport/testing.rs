//! In-memory transport that records requests and replays a canned response

use std::sync::Mutex;

use async_trait::async_trait;
use http::StatusCode;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::ClientResult;

#[derive(Debug)]
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    response: HttpResponse,
}

impl RecordingTransport {
    pub(crate) fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: HttpResponse::new(status, body),
        }
    }

    pub(crate) fn ok_json(body: serde_json::Value) -> Self {
        Self::new(StatusCode::OK, body.to_string())
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}
