//! Client-local persistence of the conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The message list is stored as JSON under a single expiring key.
//! `HistoryStore` is the key-value seam: `CookieStore` writes a browser
//! cookie (hydrate only; inert elsewhere) and `MemoryStore` keeps entries
//! in-process for native callers and tests.
//!
//! ERROR HANDLING
//! ==============
//! A stored value that does not parse as a message list is logged and
//! treated as absent, so a corrupted cookie degrades to the greeting
//! instead of breaking the widget.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::time::Duration;

use crate::state::chat::ChatMessage;

/// Key the conversation is stored under.
pub const HISTORY_KEY: &str = "chatMessages";
/// Lifetime of the stored conversation: 7 days.
pub const HISTORY_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("history storage failed: {0}")]
    Storage(String),
}

/// Expiring string key-value store.
pub trait HistoryStore {
    /// Value stored under `key`, unless missing or expired.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key` for `ttl`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the backing store rejects the write.
    fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), HistoryError>;
}

/// Read the persisted conversation, if present and well-formed.
pub fn load_history(store: &impl HistoryStore) -> Option<Vec<ChatMessage>> {
    let raw = store.get(HISTORY_KEY)?;
    match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
        Ok(messages) => Some(messages),
        Err(e) => {
            log::warn!("ignoring malformed chat history: {e}");
            None
        }
    }
}

/// Overwrite the persisted conversation with `messages`.
///
/// # Errors
///
/// Returns an error if serialization or the store write fails.
pub fn save_history(store: &impl HistoryStore, messages: &[ChatMessage]) -> Result<(), HistoryError> {
    let raw = serde_json::to_string(messages)?;
    store.put(HISTORY_KEY, &raw, HISTORY_TTL)
}

/// Browser cookie store scoped to the whole site.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

impl HistoryStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let cookies = html_document()?.cookie().ok()?;
            let raw = cookie_value(&cookies, key)?;
            js_sys::decode_uri_component(raw).ok().map(String::from)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), HistoryError> {
        #[cfg(feature = "hydrate")]
        {
            let doc = html_document().ok_or_else(|| HistoryError::Storage("no document".to_owned()))?;
            let encoded = String::from(js_sys::encode_uri_component(value));
            doc.set_cookie(&cookie_assignment(key, &encoded, ttl))
                .map_err(|e| HistoryError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value, ttl);
            Ok(())
        }
    }
}

/// Find `key` in a `document.cookie` string (`a=1; b=2`).
#[cfg(any(test, feature = "hydrate"))]
fn cookie_value<'a>(cookies: &'a str, key: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim_start().split_once('='))
        .find_map(|(name, value)| (name == key).then_some(value))
}

/// `document.cookie` assignment writing `key` with a max-age of `ttl`.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_assignment(key: &str, encoded_value: &str, ttl: Duration) -> String {
    format!("{key}={encoded_value}; max-age={}; path=/; SameSite=Lax", ttl.as_secs())
}

/// In-process store with per-entry expiry.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, (String, std::time::Instant)>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl HistoryStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.borrow_mut();
        let (value, expires_at) = entries.get(key)?;
        if std::time::Instant::now() >= *expires_at {
            entries.remove(key);
            return None;
        }
        Some(value.clone())
    }

    fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), HistoryError> {
        let expires_at = std::time::Instant::now() + ttl;
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), (value.to_owned(), expires_at));
        Ok(())
    }
}
