//! HTTP transport seam
//!
//! The repository only ever issues plain GETs, so the transport is a single
//! async method. Production uses reqwest; tests substitute canned responses.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;

/// Status and full body of a completed request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs GET requests on behalf of the repository.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `url` and reads the whole body.
    ///
    /// Only failures to obtain a response are errors; non-2xx statuses are
    /// returned as-is for the caller to judge.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Transport backed by a shared reqwest client.
///
/// No request timeout is configured; a hung server blocks the caller.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
