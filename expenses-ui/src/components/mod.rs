//! UI Components
//!
//! Behaviour attached to server-rendered controls.

pub mod add_purchase;
