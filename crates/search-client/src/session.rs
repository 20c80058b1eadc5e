//! Controller, transport and browser history wired together.

use tracing::debug;

use crate::controller::{DisplayState, FetchTicket, SearchController};
use crate::criteria::{AdvancedCriteria, PageSize, ViewMode};
use crate::transport::AdvocateSearchTransport;

/// In-memory stand-in for the browser history stack of query strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    /// History holding a single entry.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// Query string of the current entry.
    #[must_use]
    pub fn current(&self) -> &str {
        self.entries.get(self.index).map_or("", String::as_str)
    }

    /// Push `query` after the current entry, dropping any forward entries.
    ///
    /// Pushing the current query is a no-op and returns `false`, matching a
    /// router that ignores navigation to the location it is already on.
    pub fn push(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.current() {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(query);
        self.index = self.entries.len() - 1;
        true
    }

    /// Step back one entry; `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry; `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; history holds at least the initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A search page: every navigation re-derives state from the URL and waits
/// for the resulting fetch.
pub struct SearchSession<T> {
    controller: SearchController,
    transport: T,
    history: History,
}

impl<T: AdvocateSearchTransport> SearchSession<T> {
    /// Session with an empty query, before the page is opened.
    pub fn new(transport: T) -> Self {
        Self {
            controller: SearchController::new(),
            transport,
            history: History::new(""),
        }
    }

    /// The underlying controller.
    pub const fn controller(&self) -> &SearchController {
        &self.controller
    }

    /// Browser history so far.
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// What the results area shows.
    pub const fn display(&self) -> &DisplayState {
        self.controller.display()
    }

    /// Land on the page at `query` and load it.
    pub async fn open(&mut self, query: &str) -> &DisplayState {
        self.history = History::new(query);
        self.load().await
    }

    /// Type into the basic search box.
    pub async fn edit_basic(&mut self, term: &str) -> &DisplayState {
        let url = self.controller.edit_basic(term);
        self.navigate(url).await
    }

    /// Submit the advanced form. Empty criteria change nothing.
    pub async fn submit_advanced(&mut self, criteria: AdvancedCriteria) -> &DisplayState {
        match self.controller.submit_advanced(criteria) {
            Some(url) => self.navigate(url).await,
            None => self.controller.display(),
        }
    }

    /// Go to `page` of the current search.
    pub async fn change_page(&mut self, page: u32) -> &DisplayState {
        let url = self.controller.change_page(page);
        self.navigate(url).await
    }

    /// Change the page size.
    pub async fn change_limit(&mut self, limit: PageSize) -> &DisplayState {
        let url = self.controller.change_limit(limit);
        self.navigate(url).await
    }

    /// Clear every filter.
    pub async fn reset(&mut self) -> &DisplayState {
        let url = self.controller.reset();
        self.navigate(url).await
    }

    /// Switch result layout without fetching.
    pub const fn select_view(&mut self, view: ViewMode) {
        self.controller.select_view(view);
    }

    /// Browser back button.
    pub async fn back(&mut self) -> &DisplayState {
        if self.history.back() {
            self.load().await
        } else {
            self.controller.display()
        }
    }

    /// Browser forward button.
    pub async fn forward(&mut self) -> &DisplayState {
        if self.history.forward() {
            self.load().await
        } else {
            self.controller.display()
        }
    }

    /// Re-run the last fetch after a failure.
    pub async fn retry(&mut self) -> &DisplayState {
        match self.controller.retry() {
            Some(ticket) => self.dispatch(ticket).await,
            None => self.controller.display(),
        }
    }

    async fn navigate(&mut self, url: String) -> &DisplayState {
        if self.history.push(url) {
            self.load().await
        } else {
            debug!("navigation to the current location ignored");
            self.controller.display()
        }
    }

    async fn load(&mut self) -> &DisplayState {
        let ticket = self.controller.on_location_change(self.history.current());
        self.dispatch(ticket).await
    }

    async fn dispatch(&mut self, ticket: FetchTicket) -> &DisplayState {
        let outcome = self.transport.search(&ticket.request).await;
        self.controller.apply_response(ticket.seq, outcome);
        self.controller.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{SearchCriteria, UrlState};
    use crate::model::SearchPage;
    use crate::transport::{MockAdvocateSearchTransport, TransportError};
    use mockall::Sequence;
    use pagination::{PageRequest, Paginated};
    use rstest::rstest;

    fn empty_page(request: &UrlState) -> SearchPage {
        let page = PageRequest::new(request.page, request.limit.as_u32()).expect("valid page");
        Paginated::empty(page)
    }

    #[rstest]
    fn history_push_truncates_forward_entries() {
        let mut history = History::new("");
        assert!(history.push("page=2"));
        assert!(history.push("page=3"));
        assert!(history.back());
        assert!(history.push("search=x"));

        assert!(!history.forward());
        assert_eq!(history.current(), "search=x");
        assert_eq!(history.len(), 3);
        assert!(!history.push("search=x"));
    }

    #[rstest]
    fn history_stops_at_its_ends() {
        let mut history = History::new("a=1");
        assert!(!history.back());
        assert!(!history.forward());
        assert_eq!(history.current(), "a=1");
    }

    #[rstest]
    #[tokio::test]
    async fn back_refetches_the_previous_location() {
        let mut transport = MockAdvocateSearchTransport::new();
        let mut seq = Sequence::new();
        for page in [1_u32, 2, 1] {
            transport
                .expect_search()
                .withf(move |request| request.page == page)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|request| Ok(empty_page(request)));
        }

        let mut session = SearchSession::new(transport);
        session.open("").await;
        session.change_page(2).await;
        session.back().await;

        assert_eq!(session.controller().state().page, 1);
        assert_eq!(session.history().current(), "");
    }

    #[rstest]
    #[tokio::test]
    async fn repeating_the_current_search_does_not_fetch() {
        let mut transport = MockAdvocateSearchTransport::new();
        transport
            .expect_search()
            .times(1)
            .returning(|request| Ok(empty_page(request)));

        let mut session = SearchSession::new(transport);
        session.open("search=austin").await;
        let display = session.edit_basic("austin").await;

        assert_eq!(display, &DisplayState::Empty);
    }

    #[rstest]
    #[tokio::test]
    async fn retry_recovers_from_a_failure() {
        let mut transport = MockAdvocateSearchTransport::new();
        let mut seq = Sequence::new();
        transport
            .expect_search()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(TransportError::Status { status: 503 }));
        transport
            .expect_search()
            .withf(|request| {
                request.criteria
                    == SearchCriteria::Basic {
                        term: "ny".to_owned(),
                    }
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|request| Ok(empty_page(request)));

        let mut session = SearchSession::new(transport);
        let failed = session.open("search=ny").await.clone();
        assert!(matches!(failed, DisplayState::Error { .. }));

        assert_eq!(session.retry().await, &DisplayState::Empty);
    }
}
