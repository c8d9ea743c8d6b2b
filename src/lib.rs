//! events-view — console rendering for tagged session events.
//!
//! Events from discovery, sniffing, scanning and modules are routed by
//! tag to a renderer, written as text records, and optionally followed
//! by a session refresh.

pub mod config;
pub mod event;
pub mod http;
pub mod style;
pub mod view;
