//! Expense feed
//!
//! [`ExpenseFeed`] ties the renderer and the pager to one container and one
//! status line. [`FeedDriver`] adds the I/O: it samples the viewport, runs
//! fetches through a [`Transport`], and keeps loading while the page stays
//! short.
//!
//! The driver is built for a single-threaded event loop. Call
//! [`FeedDriver::check`] on every scroll event; overlapping calls are safe
//! and become no-ops while a fetch is in flight.

use std::cell::RefCell;

use crate::config::{FeedConfig, MessagesConfig};
use crate::error::{FeedError, PageResult};
use crate::model::{Expense, ExpensePage};
use crate::pager::{Action, Pager, PagerState, ScrollMetrics};
use crate::render::{Document, ExpenseRenderer};
use crate::transport::{fetch_page, RequestError, Transport};

/// Source of scroll geometry
pub trait Viewport {
    fn metrics(&self) -> ScrollMetrics;
}

/// Rendered expense list plus its pagination state
pub struct ExpenseFeed<D: Document> {
    document: D,
    container: D::Node,
    status: D::Node,
    renderer: ExpenseRenderer<D>,
    pager: Pager,
    threshold: f64,
    messages: MessagesConfig,
    started_empty: bool,
}

impl<D: Document> ExpenseFeed<D> {
    /// Render the initial payload and take its `links.next` as the cursor
    pub fn new(
        document: D,
        container: D::Node,
        status: D::Node,
        config: &FeedConfig,
        initial: ExpensePage,
    ) -> PageResult<Self> {
        let (expenses, next) = initial.into_parts();

        let mut feed = Self {
            document,
            container,
            status,
            renderer: ExpenseRenderer::new(),
            pager: Pager::new(next),
            threshold: config.scroll.threshold_px,
            messages: config.messages.clone(),
            started_empty: expenses.is_empty(),
        };
        feed.append_all(&expenses)?;

        Ok(feed)
    }

    pub fn state(&self) -> PagerState {
        self.pager.state()
    }

    pub fn cursor(&self) -> Option<&str> {
        self.pager.cursor()
    }

    /// Run the proximity check, returning the URL to fetch if any
    pub fn check(&mut self, metrics: ScrollMetrics) -> PageResult<Option<String>> {
        match self.pager.poll(metrics.is_near_bottom(self.threshold)) {
            Action::Fetch(url) => Ok(Some(url)),
            Action::Exhausted => {
                self.document.set_text(&self.status, "")?;
                Ok(None)
            }
            Action::Wait => Ok(None),
        }
    }

    /// Show the empty-list message if the initial payload had no expenses
    pub fn show_empty_notice(&self) -> PageResult<()> {
        if self.started_empty {
            self.document.set_text(&self.status, &self.messages.empty)?;
        }
        Ok(())
    }

    /// Apply a successfully fetched page
    pub fn loaded(&mut self, page: ExpensePage) -> PageResult<()> {
        let (expenses, next) = page.into_parts();
        if !self.pager.complete(next) {
            return Ok(());
        }

        tracing::debug!(
            count = expenses.len(),
            next = ?self.pager.cursor(),
            "Loaded page of expenses"
        );
        self.append_all(&expenses)
    }

    /// Record a failed fetch; no further page is loaded this session
    pub fn failed(&mut self, err: &RequestError) -> PageResult<()> {
        self.pager.fail();
        tracing::error!(error = %err, detail = err.detail(), "Failed to load more expenses");
        self.document.set_text(&self.status, &self.messages.load_error)
    }

    fn append_all(&mut self, expenses: &[Expense]) -> PageResult<()> {
        for expense in expenses {
            self.renderer
                .append(&self.document, &self.container, expense)?;
        }
        Ok(())
    }
}

/// Drives an [`ExpenseFeed`] from scroll events
pub struct FeedDriver<D: Document, T: Transport, V: Viewport> {
    feed: RefCell<ExpenseFeed<D>>,
    transport: T,
    viewport: V,
}

impl<D, T, V> FeedDriver<D, T, V>
where
    D: Document,
    T: Transport,
    V: Viewport,
{
    pub fn new(feed: ExpenseFeed<D>, transport: T, viewport: V) -> Self {
        Self {
            feed: RefCell::new(feed),
            transport,
            viewport,
        }
    }

    pub fn state(&self) -> PagerState {
        self.feed.borrow().state()
    }

    pub fn cursor(&self) -> Option<String> {
        self.feed.borrow().cursor().map(str::to_string)
    }

    /// Initial check on page load, then the empty-list notice
    pub async fn start(&self) -> Result<(), FeedError> {
        let first = self.poll()?;
        self.feed.borrow().show_empty_notice()?;

        match first {
            Some(url) => self.load_from(url).await,
            None => Ok(()),
        }
    }

    /// Scroll handler: load pages while the bottom of the page is near
    ///
    /// Returns the load error, if one occurred, so the caller can report it
    /// on its diagnostic channel.
    pub async fn check(&self) -> Result<(), FeedError> {
        match self.poll()? {
            Some(url) => self.load_from(url).await,
            None => Ok(()),
        }
    }

    fn poll(&self) -> PageResult<Option<String>> {
        let metrics = self.viewport.metrics();
        self.feed.borrow_mut().check(metrics)
    }

    async fn load_from(&self, mut url: String) -> Result<(), FeedError> {
        loop {
            match fetch_page(&self.transport, &url).await {
                Ok(page) => self.feed.borrow_mut().loaded(page)?,
                Err(err) => {
                    self.feed.borrow_mut().failed(&err)?;
                    return Err(err.into());
                }
            }

            // Re-check right away so a short page keeps filling without
            // waiting for another scroll event.
            match self.poll()? {
                Some(next) => url = next,
                None => return Ok(()),
            }
        }
    }
}
