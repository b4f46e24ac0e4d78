//! API Access
//!
//! Transport and initial payload for the expenses API.

pub mod client;

pub use client::{read_initial_page, GlooTransport};
