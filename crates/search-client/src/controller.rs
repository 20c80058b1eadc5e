//! URL-driven search state machine.
//!
//! Events compute the URL to push and leave state untouched. State is only
//! re-derived in [`SearchController::on_location_change`], which is also the
//! only place a fetch is issued. Each fetch carries a sequence number and
//! [`SearchController::apply_response`] ignores anything but the latest.

use pagination::PaginationInfo;
use tracing::debug;

use crate::criteria::{AdvancedCriteria, PageSize, SearchCriteria, UrlState, ViewMode};
use crate::model::{Advocate, SearchPage};
use crate::transport::TransportError;

/// Result of a fetch, as handed back to the controller.
pub type FetchOutcome = Result<SearchPage, TransportError>;

/// Instruction to load the page for `request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Monotonic sequence number; the latest ticket wins.
    pub seq: u64,
    /// State to fetch.
    pub request: UrlState,
}

/// What the results area shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch failed with a user-facing message.
    Error {
        /// Message to show next to the retry action.
        message: String,
    },
    /// The latest fetch matched nothing.
    Empty,
    /// The latest fetch returned advocates.
    Results {
        /// Advocates on the page.
        advocates: Vec<Advocate>,
        /// Page metadata.
        pagination: PaginationInfo,
    },
}

/// Search page state driven by URL changes.
#[derive(Debug, Default)]
pub struct SearchController {
    state: UrlState,
    view: ViewMode,
    display: DisplayState,
    latest_seq: u64,
    last_request: Option<UrlState>,
}

impl SearchController {
    /// Controller with default state, before the first location change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State last derived from the URL.
    #[must_use]
    pub const fn state(&self) -> &UrlState {
        &self.state
    }

    /// Active result layout.
    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    /// What the results area currently shows.
    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        &self.display
    }

    /// URL after typing `term` into the basic search box.
    ///
    /// Advanced criteria are dropped and paging restarts at page 1.
    #[must_use]
    pub fn edit_basic(&self, term: &str) -> String {
        self.with(
            1,
            self.state.limit,
            SearchCriteria::Basic {
                term: term.to_owned(),
            },
        )
    }

    /// URL after submitting the advanced form, or `None` when `criteria`
    /// would not filter anything.
    #[must_use]
    pub fn submit_advanced(&self, criteria: AdvancedCriteria) -> Option<String> {
        if criteria.is_empty() {
            debug!("ignoring empty advanced search");
            return None;
        }
        Some(self.with(1, self.state.limit, SearchCriteria::Advanced(criteria)))
    }

    /// URL for `page` of the current search. Pages below 1 are treated as 1.
    #[must_use]
    pub fn change_page(&self, page: u32) -> String {
        self.with(page.max(1), self.state.limit, self.state.criteria.clone())
    }

    /// URL for the current search at a new page size, back on page 1.
    #[must_use]
    pub fn change_limit(&self, limit: PageSize) -> String {
        self.with(1, limit, self.state.criteria.clone())
    }

    /// URL with every filter cleared, page 1, same page size.
    #[must_use]
    pub fn reset(&self) -> String {
        self.with(1, self.state.limit, SearchCriteria::default())
    }

    /// Switch result layout. Never triggers a fetch.
    pub const fn select_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Re-derive state from the browser query and issue a fetch for it.
    pub fn on_location_change(&mut self, query: &str) -> FetchTicket {
        self.state = UrlState::from_query(query);
        self.issue(self.state.clone())
    }

    /// Record the outcome of the fetch tagged `seq`.
    ///
    /// Returns `false` and leaves the display unchanged when a newer fetch
    /// has been issued since.
    pub fn apply_response(&mut self, seq: u64, outcome: FetchOutcome) -> bool {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "discarding stale search response");
            return false;
        }
        self.display = match outcome {
            Ok(page) if page.data.is_empty() => DisplayState::Empty,
            Ok(page) => DisplayState::Results {
                advocates: page.data,
                pagination: page.pagination,
            },
            Err(err) => DisplayState::Error {
                message: err.to_string(),
            },
        };
        true
    }

    /// Re-issue the last fetch with identical parameters.
    ///
    /// Returns `None` before anything has been fetched.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let request = self.last_request.clone()?;
        Some(self.issue(request))
    }

    fn issue(&mut self, request: UrlState) -> FetchTicket {
        self.latest_seq += 1;
        self.display = DisplayState::Loading;
        self.last_request = Some(request.clone());
        debug!(seq = self.latest_seq, query = %request.to_api_query(), "issuing advocate search");
        FetchTicket {
            seq: self.latest_seq,
            request,
        }
    }

    fn with(&self, page: u32, limit: PageSize, criteria: SearchCriteria) -> String {
        UrlState {
            page,
            limit,
            criteria,
        }
        .to_query()
    }
}
