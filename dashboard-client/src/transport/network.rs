//! Network transport backed by `reqwest`

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};

use super::{HttpRequest, HttpResponse, HttpTransport, RequestBody};
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP transport for a remote goods service
#[derive(Debug, Clone)]
pub struct NetworkTransport {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl NetworkTransport {
    /// Create a new transport from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Self::with_client(client, config)
    }

    /// Create a transport reusing an existing [`reqwest::Client`]
    pub fn with_client(client: Client, config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }
        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Resolve a request against the base URL, percent-encoding
    /// segments and query pairs
    pub fn url_for(&self, request: &HttpRequest) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().extend(&request.segments);
        }
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }
}

#[async_trait]
impl HttpTransport for NetworkTransport {
    async fn execute(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        let url = self.url_for(&request)?;
        tracing::debug!(
            method = %request.method,
            path = %request.path(),
            query_pairs = request.query.len(),
            "Sending goods request"
        );

        let mut req = self.client.request(request.method, url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        req = match request.body {
            RequestBody::Empty => req,
            RequestBody::Json(body) => req.json(&body),
            RequestBody::Multipart { field, file } => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.content_type)?;
                req.multipart(Form::new().part(field, part))
            }
        };

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}
