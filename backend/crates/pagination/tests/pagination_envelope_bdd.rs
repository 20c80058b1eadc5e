//! Behavioural coverage for pagination metadata derivation.

use std::cell::{Cell, RefCell};

use pagination::{PageRequest, PaginationInfo};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct EnvelopeWorld {
    request: Cell<Option<PageRequest>>,
    info: RefCell<Option<PaginationInfo>>,
}

impl EnvelopeWorld {
    fn info(&self) -> PaginationInfo {
        self.info.borrow().expect("pagination info computed")
    }
}

#[fixture]
fn world() -> EnvelopeWorld {
    EnvelopeWorld::default()
}

#[given("a request for page {page} with limit {limit}")]
fn a_request_for_page(world: &EnvelopeWorld, page: u32, limit: u32) {
    let request = PageRequest::new(page, limit).expect("valid page request");
    world.request.set(Some(request));
}

#[given("a raw request with page \"{page}\" and limit \"{limit}\"")]
fn a_raw_request(world: &EnvelopeWorld, page: String, limit: String) {
    let request = PageRequest::from_raw(Some(page.as_str()), Some(limit.as_str()));
    world.request.set(Some(request));
}

#[when("the store reports {total} matches")]
fn the_store_reports_matches(world: &EnvelopeWorld, total: u64) {
    let request = world.request.get().expect("request configured");
    *world.info.borrow_mut() = Some(PaginationInfo::new(request, total));
}

#[then("the envelope reports {pages} total pages")]
fn the_envelope_reports_total_pages(world: &EnvelopeWorld, pages: u64) {
    assert_eq!(world.info().total_pages, pages);
}

#[then("the envelope has a next page")]
fn the_envelope_has_a_next_page(world: &EnvelopeWorld) {
    assert!(world.info().has_next_page);
}

#[then("the envelope has no next page")]
fn the_envelope_has_no_next_page(world: &EnvelopeWorld) {
    assert!(!world.info().has_next_page);
}

#[then("the envelope has a previous page")]
fn the_envelope_has_a_previous_page(world: &EnvelopeWorld) {
    assert!(world.info().has_previous_page);
}

#[then("the envelope has no previous page")]
fn the_envelope_has_no_previous_page(world: &EnvelopeWorld) {
    assert!(!world.info().has_previous_page);
}

#[then("the envelope echoes page {page} and limit {limit}")]
fn the_envelope_echoes_request(world: &EnvelopeWorld, page: u32, limit: u32) {
    let info = world.info();
    assert_eq!((info.page, info.limit), (page, limit));
}

#[scenario(
    path = "tests/features/pagination_envelope.feature",
    name = "A middle page has neighbours on both sides"
)]
fn a_middle_page_has_neighbours_on_both_sides(world: EnvelopeWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/pagination_envelope.feature",
    name = "The last page has no next page"
)]
fn the_last_page_has_no_next_page(world: EnvelopeWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/pagination_envelope.feature",
    name = "Malformed query values fall back to defaults"
)]
fn malformed_query_values_fall_back_to_defaults(world: EnvelopeWorld) {
    drop(world);
}
