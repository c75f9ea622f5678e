//! Widget state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so the Leptos views and the headless
//! `ChatSession` drive the same transitions: `chat` owns the conversation,
//! `visibility` owns the open/close animation state machine.

pub mod chat;
pub mod visibility;
