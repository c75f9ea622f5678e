//! Wire types for the AI endpoint.
//!
//! The request carries the user's text and the embedding site's URL; both
//! success and error bodies use the same `{ "reply": ... }` shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of the single `POST` issued per user turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub text: String,
    pub url: String,
}

/// Successful endpoint response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Optional structured body attached to a failed response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub reply: Option<String>,
}

impl ErrorBody {
    /// Extract a non-empty `reply` from a raw error body, if it is JSON.
    pub fn reply_from(raw: &str) -> Option<String> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .and_then(|body| body.reply)
            .filter(|reply| !reply.is_empty())
    }
}
