//! Expenses Page
//!
//! Browser side of the expenses page, compiled to WebAssembly.
//!
//! # Features
//!
//! - Expense list grouped by date
//! - Infinite scroll through the server's pagination links
//! - Add-purchase form toggle
//!
//! # Architecture
//!
//! The server renders the page markup and injects the first page of
//! expenses as a global `data` object. This binary binds to that markup and
//! drives the `expenses` feed from scroll events.

mod api;
mod app;
mod components;
mod dom;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    if let Err(e) = app::boot() {
        web_sys::console::error_1(&format!("Failed to start expenses page: {}", e).into());
    }
}
