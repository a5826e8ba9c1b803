use std::env;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};
use crate::observability;
use crate::types::{ChatReply, ChatRequest, HelpReply};

const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the ward assistant service.
///
/// The service exposes two endpoints: `POST /chat` for conversation turns
/// and `POST /help` for help text. There is no retry or backoff; a failed
/// request is terminal per attempt and the caller decides what to do.
#[derive(Debug, Clone)]
pub struct WardClient {
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
}

impl WardClient {
    /// Create a new client.
    ///
    /// The base URL can be provided directly or read from the WARDLINE_URL
    /// environment variable; otherwise the localhost default is used.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        Self::with_options(base_url, None)
    }

    /// Create a new client with custom settings.
    pub fn with_options(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url
            .or_else(|| env::var("WARDLINE_URL").ok())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let base_url = normalize_base_url(&base_url)?;

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create and return default headers for service requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Process service response errors and convert to our Error type.
    async fn process_error_response(response: Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        // The service sends {"error":true,"status_code":...,"message":...}
        // on failure, but the body is not guaranteed.
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let error_message = serde_json::from_str::<ErrorBody>(&error_body)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| error_body.clone());

        match status_code {
            400 => Error::bad_request(error_message),
            404 => Error::not_found(error_message),
            408 => Error::timeout(error_message, None),
            429 => Error::rate_limit(error_message, None),
            500 => Error::internal_server(error_message),
            502..=504 => Error::service_unavailable(error_message),
            _ => Error::api(status_code, error_message),
        }
    }

    fn map_transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::timeout(
                format!("Request timed out: {}", e),
                Some(self.timeout.as_secs_f64()),
            )
        } else if e.is_connect() {
            Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
        } else {
            Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
        }
    }

    /// Send one conversation turn to the service.
    ///
    /// `session_id` must echo the identifier the service assigned, or be
    /// `None` on the first request (it goes over the wire as JSON null).
    pub async fn chat(&self, message: &str, session_id: Option<&str>) -> Result<ChatReply> {
        let url = format!("{}chat", self.base_url);
        let request = ChatRequest::new(message, session_id.map(String::from));

        observability::CHAT_REQUESTS.click();
        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                observability::CHAT_REQUEST_ERRORS.click();
                self.map_transport_error(e)
            })?;
        observability::CHAT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        if !response.status().is_success() {
            observability::CHAT_REQUEST_ERRORS.click();
            return Err(Self::process_error_response(response).await);
        }

        response.json::<ChatReply>().await.map_err(|e| {
            observability::CHAT_REQUEST_ERRORS.click();
            Error::serialization(
                format!("Failed to parse chat reply: {}", e),
                Some(Box::new(e)),
            )
        })
    }

    /// Fetch help text from the service. The request carries no body.
    pub async fn help(&self) -> Result<HelpReply> {
        let url = format!("{}help", self.base_url);

        observability::HELP_REQUESTS.click();
        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .send()
            .await
            .map_err(|e| {
                observability::HELP_REQUEST_ERRORS.click();
                self.map_transport_error(e)
            })?;

        if !response.status().is_success() {
            observability::HELP_REQUEST_ERRORS.click();
            return Err(Self::process_error_response(response).await);
        }

        response.json::<HelpReply>().await.map_err(|e| {
            observability::HELP_REQUEST_ERRORS.click();
            Error::serialization(
                format!("Failed to parse help reply: {}", e),
                Some(Box::new(e)),
            )
        })
    }
}

/// Validates the base URL and guarantees a trailing slash so endpoint paths
/// can be appended directly.
fn normalize_base_url(base_url: &str) -> Result<String> {
    let parsed = Url::parse(base_url)?;
    if !parsed.scheme().starts_with("http") {
        return Err(Error::url(
            format!("Unsupported scheme: {}", parsed.scheme()),
            None,
        ));
    }
    let mut base_url = base_url.to_string();
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    Ok(base_url)
}
