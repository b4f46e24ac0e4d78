//! Scroll-driven pagination state machine
//!
//! The pager owns the pagination cursor and the in-flight guard. It does no
//! I/O: [`Pager::poll`] says whether to fetch, and the caller reports the
//! outcome back with [`Pager::complete`] or [`Pager::fail`].
//!
//! ```text
//!   Idle --poll(near, cursor)--> Loading --complete(Some)--> Idle
//!     |                            |   \--complete(None)--> Exhausted
//!     |                            \--fail--> Stalled
//!     \--poll(near, no cursor)--> Exhausted
//! ```
//!
//! `Stalled` is terminal: a failed load keeps the guard held for the rest of
//! the session, so no further fetch is ever issued.

/// Default distance from the bottom, in CSS pixels, that triggers a load
pub const DEFAULT_THRESHOLD_PX: f64 = 200.0;

/// Scroll geometry sampled from the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Total height of the document body
    pub document_height: f64,
    /// Current vertical scroll offset
    pub scroll_offset: f64,
    /// Height of the visible viewport
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(document_height: f64, scroll_offset: f64, viewport_height: f64) -> Self {
        Self {
            document_height,
            scroll_offset,
            viewport_height,
        }
    }

    /// Remaining scrollable distance below the viewport
    pub fn distance_to_bottom(&self) -> f64 {
        self.document_height - self.scroll_offset - self.viewport_height
    }

    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.distance_to_bottom() < threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// Waiting for the user to approach the bottom
    Idle,
    /// A fetch is in flight
    Loading,
    /// No cursor left; nothing more to load
    Exhausted,
    /// A fetch failed; loading stays blocked for the session
    Stalled,
}

/// What the caller should do after a proximity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch this URL and report back
    Fetch(String),
    /// The list just ran out; clear the status line
    Exhausted,
    /// Nothing to do
    Wait,
}

#[derive(Debug, Clone)]
pub struct Pager {
    cursor: Option<String>,
    state: PagerState,
    exhaustion_seen: bool,
}

impl Pager {
    /// Create a pager from the initial payload's `links.next`
    pub fn new(cursor: Option<String>) -> Self {
        let state = if cursor.is_some() {
            PagerState::Idle
        } else {
            PagerState::Exhausted
        };
        Self {
            cursor,
            state,
            exhaustion_seen: false,
        }
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == PagerState::Loading
    }

    /// Run the proximity check
    ///
    /// Reports [`Action::Exhausted`] once, on the first near-bottom check
    /// after the cursor runs out.
    pub fn poll(&mut self, near_bottom: bool) -> Action {
        if !near_bottom {
            return Action::Wait;
        }

        match self.state {
            PagerState::Loading | PagerState::Stalled => Action::Wait,
            PagerState::Idle | PagerState::Exhausted => match self.cursor.clone() {
                Some(url) => {
                    self.state = PagerState::Loading;
                    tracing::debug!(url = %url, "Loading next page");
                    Action::Fetch(url)
                }
                None => {
                    self.state = PagerState::Exhausted;
                    if self.exhaustion_seen {
                        Action::Wait
                    } else {
                        self.exhaustion_seen = true;
                        tracing::debug!("No more pages");
                        Action::Exhausted
                    }
                }
            },
        }
    }

    /// Record a successful fetch and move the cursor to `next`
    ///
    /// Returns `false`, leaving the pager untouched, when no fetch was in
    /// flight.
    pub fn complete(&mut self, next: Option<String>) -> bool {
        if self.state != PagerState::Loading {
            tracing::warn!(state = ?self.state, "Ignoring page completion with no fetch in flight");
            return false;
        }

        self.state = if next.is_some() {
            PagerState::Idle
        } else {
            PagerState::Exhausted
        };
        self.cursor = next;
        true
    }

    /// Record a failed fetch; the pager never loads again
    pub fn fail(&mut self) {
        self.state = PagerState::Stalled;
    }
}
