use std::time::Duration;

use futures_util::StreamExt;
use jobboard_logging::{board_debug, board_warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::{ApiError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "https://job-tracker-server-ln8r.onrender.com";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Whole-request budget; a request still running after this is reported
    /// as a timeout instead of hanging.
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(15),
            max_response_bytes: 8 * 1024 * 1024,
        }
    }
}

/// HTTP client for every backend service. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
    max_response_bytes: u64,
}

impl BackendClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            http,
            base_url,
            max_response_bytes: settings.max_response_bytes,
        })
    }

    /// Builds `{base_url}/{segments...}`. Each segment is percent-encoded,
    /// so ids can never add path levels.
    pub(crate) fn endpoint(&self, segments: &[&str], query: Option<&str>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::new(
                    FailureKind::InvalidUrl,
                    format!("{} cannot be a base", self.base_url),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Adds a JSON body to `builder`.
    pub(crate) fn with_json<B: Serialize>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<RequestBuilder, ApiError> {
        let bytes = serde_json::to_vec(body)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        Ok(builder.header(CONTENT_TYPE, "application/json").body(bytes))
    }

    /// Sends the request and decodes the `{ success, message, ... }` envelope.
    ///
    /// HTTP status codes are not interpreted: the body alone decides between
    /// success and rejection, and a body that is not an envelope is a decode
    /// failure.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = builder.build().map_err(map_reqwest_error)?;
        let label = format!("{} {}", request.method(), request.url().path());
        board_debug!("{label} sending");

        let result = self.execute(request).await.and_then(|body| decode_envelope(&body));
        match &result {
            Ok(_) => board_debug!("{label} ok"),
            Err(err) => board_warn!("{label} failed: {err}"),
        }
        result
    }

    async fn execute(&self, request: reqwest::Request) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .execute(request)
            .await
            .map_err(map_reqwest_error)?;

        let max_bytes = self.max_response_bytes;
        if response.content_length().is_some_and(|len| len > max_bytes) {
            return Err(too_large(max_bytes));
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            if bytes.len() as u64 + chunk.len() as u64 > max_bytes {
                return Err(too_large(max_bytes));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;

    let success = value.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned);
        return Err(ApiError::new(
            FailureKind::Rejected {
                message: message.clone(),
            },
            message.unwrap_or_else(|| "request rejected".to_string()),
        ));
    }

    serde_json::from_value(value).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

fn too_large(max_bytes: u64) -> ApiError {
    ApiError::new(FailureKind::TooLarge { max_bytes }, "response too large")
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ApiError::new(FailureKind::InvalidUrl, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
