//! Leptos views of the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatWidget` owns the widget's signals and provides them as context to
//! its children (`Launcher`, `MessageList`, `InputRow`), so several widgets
//! can be mounted on one page without sharing state.

pub mod chat_widget;
pub mod input_row;
pub mod launcher;
pub mod message_list;
