use super::*;

use std::cell::RefCell;

use async_trait::async_trait;
use axum::Json;
use axum::Router;
use axum::routing::post;

use crate::net::api::{ReqwestTransport, TransportError};
use crate::net::types::{ChatReply, ChatRequest};
use crate::state::chat::ChatMessage;
use crate::state::visibility::Phase;
use crate::util::history::{HISTORY_KEY, HISTORY_TTL, MemoryStore};

struct ScriptedTransport {
    outcome: Result<ChatReply, TransportError>,
    seen: RefCell<Vec<(String, ChatRequest)>>,
}

impl ScriptedTransport {
    fn replying(reply: &str) -> Self {
        Self::with_outcome(Ok(ChatReply { reply: reply.to_owned() }))
    }

    fn with_outcome(outcome: Result<ChatReply, TransportError>) -> Self {
        Self { outcome, seen: RefCell::new(Vec::new()) }
    }
}

#[async_trait(?Send)]
impl ChatTransport for ScriptedTransport {
    async fn post(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        self.seen.borrow_mut().push((endpoint.to_owned(), request.clone()));
        self.outcome.clone()
    }
}

fn config() -> WidgetConfig {
    WidgetConfig {
        ai_url: "http://ai.test/chat".to_owned(),
        site_url: "https://site.test/".to_owned(),
        start_message: "Welcome".to_owned(),
        error_text: "Oops".to_owned(),
        ..WidgetConfig::default()
    }
}

fn mount<T: ChatTransport>(transport: T) -> ChatSession<T, MemoryStore> {
    ChatSession::mount(config(), transport, MemoryStore::default()).0
}

// =============================================================
// Mount / load
// =============================================================

#[test]
fn mount_without_history_shows_greeting() {
    let session = mount(ScriptedTransport::replying("unused"));
    assert_eq!(session.state().messages, vec![ChatMessage::bot("Welcome")]);
    assert_eq!(session.visibility().phase(), Phase::Closed);
}

#[test]
fn mount_restores_persisted_history() {
    let store = MemoryStore::default();
    let history = vec![ChatMessage::bot("Welcome"), ChatMessage::user("hi"), ChatMessage::bot("yo")];
    save_history(&store, &history).unwrap();

    let (session, _) = ChatSession::mount(config(), ScriptedTransport::replying("unused"), store);
    assert_eq!(session.state().messages, history);
}

#[test]
fn mount_with_malformed_history_falls_back_to_greeting() {
    let store = MemoryStore::default();
    store.put(HISTORY_KEY, "][", HISTORY_TTL).unwrap();

    let (session, _) = ChatSession::mount(config(), ScriptedTransport::replying("unused"), store);
    assert_eq!(session.state().messages, vec![ChatMessage::bot("Welcome")]);
}

#[test]
fn mount_shown_returns_open_transition() {
    let cfg = WidgetConfig { show: true, ..config() };
    let (session, transition) = ChatSession::mount(cfg, ScriptedTransport::replying("unused"), MemoryStore::default());
    assert_eq!(transition.map(|t| t.phase), Some(Phase::Opening));
    assert_eq!(session.visibility().phase(), Phase::Opening);
}

// =============================================================
// send_message
// =============================================================

#[tokio::test]
async fn send_message_appends_turn_and_persists() {
    let mut session = mount(ScriptedTransport::replying("Hello!"));
    session.set_input("hi");
    session.send_message().await;

    assert_eq!(
        session.state().messages,
        vec![ChatMessage::bot("Welcome"), ChatMessage::user("hi"), ChatMessage::bot("Hello!")]
    );
    assert!(session.state().error.is_none());
    assert!(!session.state().loading);
    assert!(session.input().is_empty());
    assert_eq!(load_history(session.store()), Some(session.state().messages.clone()));

    let seen = session.transport.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "http://ai.test/chat");
    assert_eq!(seen[0].1, ChatRequest { text: "hi".to_owned(), url: "https://site.test/".to_owned() });
}

#[tokio::test]
async fn send_message_blank_input_does_nothing() {
    let mut session = mount(ScriptedTransport::replying("unused"));
    session.set_input("   ");
    session.send_message().await;

    assert_eq!(session.state().messages, vec![ChatMessage::bot("Welcome")]);
    assert!(session.state().error.is_none());
    assert_eq!(session.input(), "   ");
    assert!(session.transport.seen.borrow().is_empty());
    assert_eq!(load_history(session.store()), None);
}

#[tokio::test]
async fn send_message_failure_adds_error_text_and_banner() {
    let mut session = mount(ScriptedTransport::with_outcome(Err(TransportError::Network("refused".to_owned()))));
    session.set_input("hi");
    session.send_message().await;

    assert_eq!(&session.state().messages[1..], &[ChatMessage::user("hi"), ChatMessage::bot("Oops")]);
    assert_eq!(session.state().error.as_deref(), Some("Oops"));
    assert_eq!(load_history(session.store()).map(|m| m.len()), Some(3));
}

#[tokio::test]
async fn send_message_after_error_clears_banner() {
    let mut session = mount(ScriptedTransport::with_outcome(Err(TransportError::Unavailable)));
    session.set_input("one");
    session.send_message().await;
    assert!(session.state().error.is_some());

    session.transport.outcome = Ok(ChatReply { reply: "back".to_owned() });
    session.set_input("two");
    session.send_message().await;
    assert!(session.state().error.is_none());
    assert_eq!(session.state().messages.last(), Some(&ChatMessage::bot("back")));
}

// =============================================================
// clear_chat
// =============================================================

#[tokio::test]
async fn clear_chat_resets_and_persists_greeting() {
    let mut session = mount(ScriptedTransport::with_outcome(Err(TransportError::Unavailable)));
    session.set_input("hi");
    session.send_message().await;

    session.clear_chat();
    assert_eq!(session.state().messages, vec![ChatMessage::bot("Welcome")]);
    assert!(session.state().error.is_none());
    assert_eq!(load_history(session.store()), Some(vec![ChatMessage::bot("Welcome")]));
}

// =============================================================
// toggle / unmount
// =============================================================

#[tokio::test]
async fn toggle_chat_settles_open_then_closed() {
    let mut session = mount(ScriptedTransport::replying("unused"));

    let t = session.toggle_chat();
    assert!(session.settle(t).await);
    assert!(session.visibility().is_shown());

    let t = session.toggle_chat();
    assert!(session.settle(t).await);
    assert!(!session.visibility().is_shown());
}

#[tokio::test]
async fn unmount_closes_from_any_phase() {
    let mut session = mount(ScriptedTransport::replying("unused"));
    let opening = session.toggle_chat();
    let closing = session.unmount();

    assert!(!session.settle(opening).await);
    assert!(session.settle(closing).await);
    assert_eq!(session.visibility().phase(), Phase::Closed);
}

// =============================================================
// End to end over HTTP
// =============================================================

#[tokio::test]
async fn http_endpoint_reply_is_appended() {
    let app = Router::new().route(
        "/chat",
        post(|Json(req): Json<ChatRequest>| async move {
            let reply = if req.text == "hi" { "Hello!" } else { "?" };
            Json(serde_json::json!({ "reply": reply }))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let cfg = WidgetConfig { ai_url: format!("http://{addr}/chat"), ..config() };
    let (mut session, _) = ChatSession::mount(cfg, ReqwestTransport::default(), MemoryStore::default());
    session.set_input("hi");
    session.send_message().await;

    assert_eq!(&session.state().messages[1..], &[ChatMessage::user("hi"), ChatMessage::bot("Hello!")]);
    assert!(session.state().error.is_none());
}

#[tokio::test]
async fn http_network_failure_uses_configured_error_text() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let cfg = WidgetConfig { ai_url: format!("http://{addr}/chat"), ..config() };
    let (mut session, _) = ChatSession::mount(cfg, ReqwestTransport::default(), MemoryStore::default());
    session.set_input("hi");
    session.send_message().await;

    assert_eq!(&session.state().messages[1..], &[ChatMessage::user("hi"), ChatMessage::bot("Oops")]);
    assert_eq!(session.state().error.as_deref(), Some("Oops"));
}
