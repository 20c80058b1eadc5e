//! Search state controller for the advocate directory client.
//!
//! The URL query string is the only persisted form of the search: page,
//! page size and either a free-text term or a set of advanced criteria.
//! User events never mutate the displayed list directly. They compute the
//! next URL; the resulting location change re-derives state and issues the
//! fetch. Responses are tagged with a sequence number so a slow, superseded
//! request can never overwrite the results of a newer one.
//!
//! # Example
//!
//! ```
//! use search_client::{PageSize, SearchController, SearchCriteria};
//!
//! let mut controller = SearchController::new();
//! let ticket = controller.on_location_change("search=austin&limit=50");
//! assert_eq!(ticket.request.limit, PageSize::Fifty);
//! assert_eq!(
//!     ticket.request.criteria,
//!     SearchCriteria::Basic { term: "austin".to_owned() }
//! );
//!
//! // Paging keeps the term and limit; the caller pushes the returned URL.
//! assert_eq!(controller.change_page(2), "page=2&limit=50&search=austin");
//! ```

mod controller;
mod criteria;
mod model;
mod session;
mod transport;

pub use controller::{DisplayState, FetchOutcome, FetchTicket, SearchController};
pub use criteria::{AdvancedCriteria, PageSize, SearchCriteria, UrlState, ViewMode};
pub use model::{Advocate, SearchPage};
pub use session::{History, SearchSession};
pub use transport::{AdvocateSearchTransport, HttpSearchTransport, TransportError};

#[cfg(test)]
pub use transport::MockAdvocateSearchTransport;
