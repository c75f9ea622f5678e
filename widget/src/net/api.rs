//! REST transport for the AI endpoint.
//!
//! Client-side (hydrate): `BrowserTransport` issues the call via `gloo-net`.
//! Native targets: `ReqwestTransport` issues the same call via `reqwest`.
//! Outside the browser `BrowserTransport` reports `Unavailable` instead of
//! touching the network, so SSR renders never send.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `TransportError`. A non-2xx response keeps the
//! server's `{reply}` body when it has one, so callers can show the server's
//! own wording instead of the generic error text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{ChatReply, ChatRequest};
#[cfg(any(test, feature = "hydrate", not(target_arch = "wasm32")))]
use super::types::ErrorBody;

/// Errors produced by a single request/reply round trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, refused, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned status {status}")]
    Status { status: u16, reply: Option<String> },

    /// A success response whose body is not `{ "reply": string }`.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// No transport exists in this build (server-side render).
    #[error("transport not available in this build")]
    Unavailable,
}

impl TransportError {
    /// Server-supplied reply carried by a failed response, if any.
    pub fn server_reply(&self) -> Option<&str> {
        match self {
            Self::Status { reply: Some(reply), .. } if !reply.is_empty() => Some(reply),
            _ => None,
        }
    }
}

/// One-shot POST of a user turn to the AI endpoint.
#[async_trait(?Send)]
pub trait ChatTransport {
    /// Send `request` to `endpoint` and decode the reply.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` describing why no reply was obtained.
    async fn post(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatReply, TransportError>;
}

#[cfg(any(test, feature = "hydrate", not(target_arch = "wasm32")))]
fn status_error(status: u16, body: &str) -> TransportError {
    TransportError::Status { status, reply: ErrorBody::reply_from(body) }
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl ChatTransport for BrowserTransport {
    async fn post(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(endpoint)
                .json(request)
                .map_err(|e| TransportError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(status_error(resp.status(), &body));
            }
            resp.json::<ChatReply>()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, request);
            Err(TransportError::Unavailable)
        }
    }
}

/// Native HTTP transport backed by a shared `reqwest::Client`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl ChatTransport for ReqwestTransport {
    async fn post(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        let resp = self
            .http
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }
        resp.json::<ChatReply>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
