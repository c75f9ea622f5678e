//! Headless chat session.
//!
//! Runs the widget's contracts (load, send, clear, toggle) against any
//! `ChatTransport` and `HistoryStore` without rendering. The Leptos
//! component performs the same `ChatState` / `VisibilityState` steps through
//! signals; this type serves native embedders and the contract tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::WidgetConfig;
use crate::net::api::ChatTransport;
use crate::state::chat::ChatState;
use crate::state::visibility::{Transition, VisibilityState};
use crate::util::animation;
use crate::util::history::{HistoryStore, load_history, save_history};

pub struct ChatSession<T, S> {
    config: WidgetConfig,
    state: ChatState,
    /// Pending text of the input field.
    input: String,
    visibility: VisibilityState,
    transport: T,
    store: S,
}

impl<T: ChatTransport, S: HistoryStore> ChatSession<T, S> {
    /// Mount a session: restore history and start opening if the
    /// configuration asks for a visible window.
    pub fn mount(config: WidgetConfig, transport: T, store: S) -> (Self, Option<Transition>) {
        let (visibility, transition) = VisibilityState::mounted(config.show);
        let mut session = Self {
            config,
            state: ChatState::default(),
            input: String::new(),
            visibility,
            transport,
            store,
        };
        session.load_messages();
        (session, transition)
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Replace the conversation with the persisted one, or the greeting.
    pub fn load_messages(&mut self) {
        let history = load_history(&self.store);
        self.state.load(history, &self.config);
    }

    /// Send the pending input as one user turn.
    ///
    /// No-op for blank input or while clearing. Otherwise exactly one user
    /// message is appended before the request and exactly one bot message
    /// after it resolves; the conversation is persisted either way.
    pub async fn send_message(&mut self) {
        let Some(request) = self.state.begin_send(&self.input, &self.config) else {
            return;
        };
        self.input.clear();
        let outcome = self.transport.post(&self.config.ai_url, &request).await;
        if let Err(e) = &outcome {
            log::warn!("chat request to {} failed: {e}", self.config.ai_url);
        }
        self.state.finish_send(outcome, &self.config);
        self.persist();
    }

    /// Reset the conversation to the greeting and persist it.
    pub fn clear_chat(&mut self) {
        self.state.clear(&self.config);
        self.persist();
    }

    pub fn toggle_chat(&mut self) -> Transition {
        self.visibility.toggle()
    }

    /// Wait for `transition` to finish animating, then settle it.
    ///
    /// Returns `false` if a later transition superseded it.
    pub async fn settle(&mut self, transition: Transition) -> bool {
        animation::completed(transition.duration).await;
        self.visibility.settle(transition.generation)
    }

    /// Start the close animation that accompanies teardown.
    pub fn unmount(&mut self) -> Transition {
        self.visibility.close()
    }

    fn persist(&self) {
        if let Err(e) = save_history(&self.store, &self.state.messages) {
            log::warn!("failed to persist chat history: {e}");
        }
    }
}
