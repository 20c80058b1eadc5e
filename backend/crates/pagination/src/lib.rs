//! Page-number pagination primitives shared by the advocate directory.
//!
//! Endpoints accept a 1-based `page` and a `limit`, translate them into an
//! offset window for the store, and return results inside a
//! [`Paginated`] envelope whose [`PaginationInfo`] is derived from the total
//! match count. Query-string input is parsed leniently: malformed numbers
//! fall back to defaults instead of failing the request.

mod envelope;
mod lenient;
mod request;

pub use envelope::{Paginated, PaginationInfo};
pub use lenient::parse_leading_integer;
pub use request::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PageRequest, PaginationError};
