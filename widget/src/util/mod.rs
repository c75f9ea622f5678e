//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, CSS transitions,
//! inline styles) from component logic to improve reuse and testability.

pub mod animation;
pub mod history;
pub mod style;
