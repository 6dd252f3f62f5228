use std::time::Duration;

use bytes::{Bytes, BytesMut};
use engine_logging::engine_trace;
use futures_util::StreamExt;

use crate::{FailureKind, LookupError};

/// Availability endpoint; the page URL is appended verbatim.
pub const WAYBACK_QUERY_URL: &str = "https://archive.org/wayback/available?url=";

/// Largest response body accepted from the archive (1 MiB).
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Transport limits. Timeouts are off unless set; the transport defaults apply.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            max_bytes: MAX_BODY_BYTES,
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// One GET, no retry. Any error means the caller gets no body.
    async fn fetch(&self, url: &str) -> Result<Bytes, LookupError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, LookupError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| LookupError::new(FailureKind::Network, err.to_string()))
    }

    /// `actual` is only known when the server declared a length.
    fn too_large(&self, actual: Option<u64>) -> LookupError {
        LookupError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual,
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, LookupError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| LookupError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(Some(content_len)));
            }
        }

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                // The rest of the stream is never read, so the full size is unknown.
                return Err(self.too_large(None));
            }
            body.extend_from_slice(&chunk);
        }

        engine_trace!("fetched {} bytes from {}", body.len(), url);
        Ok(body.freeze())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        return LookupError::new(FailureKind::Timeout, err.to_string());
    }
    LookupError::new(FailureKind::Network, err.to_string())
}
