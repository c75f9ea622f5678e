//! Networking modules for the AI endpoint round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema and `api` provides the transports
//! that POST one user turn to the configured endpoint.

pub mod api;
pub mod types;
