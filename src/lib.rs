//! # Expenses
//!
//! Core of the expenses page: renders purchases grouped by date and loads
//! further pages as the user scrolls.
//!
//! ## Modules
//!
//! - [`model`]: Wire types for expenses and pages
//! - [`transport`]: HTTP contract shared by every platform
//! - [`render`]: Date-grouped list renderer over a [`render::Document`]
//! - [`pager`]: Pagination cursor and in-flight guard
//! - [`feed`]: Renderer + pager + transport, driven by scroll events
//! - [`config`]: TOML configuration
//!
//! The browser binary lives in `expenses-ui/` and implements the
//! `Document`, `Viewport` and `Transport` seams over `web-sys`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use expenses::{ExpenseFeed, ExpensePage, FeedConfig, FeedDriver, ReqwestTransport};
//! # use expenses::{Document, Viewport, ScrollMetrics, PageResult};
//! # struct Page;
//! # impl Document for Page {
//! #     type Node = ();
//! #     fn create_block(&self, _: &str, _: Option<&str>) -> PageResult<()> { Ok(()) }
//! #     fn append_child(&self, _: &(), _: &()) -> PageResult<()> { Ok(()) }
//! #     fn set_text(&self, _: &(), _: &str) -> PageResult<()> { Ok(()) }
//! # }
//! # struct Screen;
//! # impl Viewport for Screen {
//! #     fn metrics(&self) -> ScrollMetrics { ScrollMetrics::new(0.0, 0.0, 0.0) }
//! # }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let initial = ExpensePage::default().next("/expenses?page=1");
//!     let feed = ExpenseFeed::new(Page, (), (), &FeedConfig::default(), initial)?;
//!
//!     let transport = ReqwestTransport::with_base("http://localhost:5000")?;
//!     let driver = FeedDriver::new(feed, transport, Screen);
//!
//!     driver.start().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod pager;
pub mod render;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{generate_default_config, ConfigError, FeedConfig};
pub use error::{FeedError, PageError, PageResult};
pub use feed::{ExpenseFeed, FeedDriver, Viewport};
pub use model::{Expense, ExpensePage, Links};
pub use pager::{Action, Pager, PagerState, ScrollMetrics, DEFAULT_THRESHOLD_PX};
pub use render::{Document, ExpenseRenderer};
pub use transport::{
    fetch_page, interpret, request, Method, RawResponse, Request, RequestError, RequestResult,
    Transport, FAILURE_MESSAGE,
};

#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
