//! Conversation state and its send/clear/load transitions.
//!
//! The transitions are synchronous; the one network round trip of a send
//! happens between `begin_send` and `finish_send`, driven by the caller.
//! Overlapping sends are not serialized: each `finish_send` appends its
//! reply in completion order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;
use crate::net::api::TransportError;
use crate::net::types::{ChatReply, ChatRequest};

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into() }
    }
}

/// State for one widget's conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Standing error banner; `None` when no error is shown.
    pub error: Option<String>,
    pub loading: bool,
    /// Set while a clear is in progress; sends are ignored meanwhile.
    pub clearing: bool,
}

impl ChatState {
    /// Adopt persisted history verbatim, or seed the greeting when there is
    /// none.
    pub fn load(&mut self, history: Option<Vec<ChatMessage>>, config: &WidgetConfig) {
        self.messages = history.unwrap_or_else(|| vec![ChatMessage::bot(config.greeting())]);
    }

    /// Start a user turn with the pending `input` text.
    ///
    /// Returns `None` (and changes nothing) while clearing or when `input`
    /// is blank. Otherwise clears the error, appends the raw input as a user
    /// message, sets `loading`, and returns the request to send. The caller
    /// owns the input field and empties it when a request is returned.
    pub fn begin_send(&mut self, input: &str, config: &WidgetConfig) -> Option<ChatRequest> {
        if self.clearing || input.trim().is_empty() {
            return None;
        }
        self.error = None;
        let text = input.to_owned();
        self.messages.push(ChatMessage::user(text.clone()));
        self.loading = true;
        Some(ChatRequest { text, url: config.site_url.clone() })
    }

    /// Complete a user turn with the transport outcome.
    ///
    /// Appends exactly one bot message: the reply, the server's own error
    /// reply, or the configured error text (which also becomes the banner).
    pub fn finish_send(&mut self, outcome: Result<ChatReply, TransportError>, config: &WidgetConfig) {
        match outcome {
            Ok(reply) => self.messages.push(ChatMessage::bot(reply.reply)),
            Err(err) => {
                if let Some(reply) = err.server_reply() {
                    self.messages.push(ChatMessage::bot(reply));
                } else {
                    self.messages.push(ChatMessage::bot(config.error_text.clone()));
                    self.error = Some(config.error_text.clone());
                }
            }
        }
        self.loading = false;
    }

    /// Values whose change should scroll the list to its newest entry.
    pub fn scroll_anchor(&self) -> (usize, bool) {
        (self.messages.len(), self.loading)
    }

    /// Reset to the greeting, dropping any error and loading flag.
    pub fn clear(&mut self, config: &WidgetConfig) {
        self.clearing = true;
        self.messages = vec![ChatMessage::bot(config.greeting())];
        self.error = None;
        self.loading = false;
        self.clearing = false;
    }
}
