//! Behavioural tests for advocate search over the in-memory directory.
//!
//! The scenarios drive the search service end to end: query-string parsing,
//! predicate building, the specialty AND-join, pagination and shaping.

use std::cell::RefCell;
use std::sync::Arc;

use advocate_directory::domain::ports::AdvocateSearchQuery;
use advocate_directory::domain::{Advocate, AdvocateSearchService, NewAdvocate, SearchRequest};
use advocate_directory::outbound::memory::InMemoryAdvocateStore;
use pagination::Paginated;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;
use url::form_urlencoded;

struct SearchWorld {
    runtime: Runtime,
    store: Arc<InMemoryAdvocateStore>,
    result: RefCell<Option<Paginated<Advocate>>>,
}

impl SearchWorld {
    fn page(&self) -> Paginated<Advocate> {
        self.result.borrow().clone().expect("search executed")
    }
}

#[fixture]
fn world() -> SearchWorld {
    SearchWorld {
        runtime: Runtime::new().expect("create runtime"),
        store: Arc::new(InMemoryAdvocateStore::default()),
        result: RefCell::new(None),
    }
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

#[given(
    "advocate \"{name}\" in \"{city}\" with {years} years of experience and specialties \"{specialties}\""
)]
fn an_advocate(world: &SearchWorld, name: String, city: String, years: i32, specialties: String) {
    world.store.insert(
        NewAdvocate {
            first_name: name,
            last_name: "Rivera".to_owned(),
            city,
            degree: "MD".to_owned(),
            years_of_experience: years,
            phone_number: 5_550_100_000,
        },
        split_list(&specialties).as_slice(),
    );
}

#[when("the directory is searched with \"{query}\"")]
fn the_directory_is_searched(world: &SearchWorld, query: String) {
    let request = SearchRequest::from_query_pairs(form_urlencoded::parse(query.as_bytes()));
    let service = AdvocateSearchService::new(Arc::clone(&world.store));
    let page = world
        .runtime
        .block_on(service.search(&request))
        .expect("search succeeds");
    *world.result.borrow_mut() = Some(page);
}

#[then("the results are exactly \"{names}\"")]
fn the_results_are_exactly(world: &SearchWorld, names: String) {
    let page = world.page();
    let found: Vec<&str> = page
        .data
        .iter()
        .map(|advocate| advocate.first_name.as_str())
        .collect();
    assert_eq!(found, split_list(&names));
}

#[then("the results are empty")]
fn the_results_are_empty(world: &SearchWorld) {
    assert!(world.page().data.is_empty());
}

#[then("the search reports {total} total matches")]
fn the_search_reports_total_matches(world: &SearchWorld, total: u64) {
    assert_eq!(world.page().pagination.total_count, total);
}

#[then("the page has a previous page")]
fn the_page_has_a_previous_page(world: &SearchWorld) {
    assert!(world.page().pagination.has_previous_page);
}

#[then("the page has no next page")]
fn the_page_has_no_next_page(world: &SearchWorld) {
    assert!(!world.page().pagination.has_next_page);
}

#[scenario(
    path = "tests/features/advocate_search.feature",
    name = "Minimum experience is inclusive and filters out juniors"
)]
fn minimum_experience_filters_out_juniors(world: SearchWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/advocate_search.feature",
    name = "Several specialties must all be present"
)]
fn several_specialties_must_all_be_present(world: SearchWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/advocate_search.feature",
    name = "Basic search matches the city case-insensitively"
)]
fn basic_search_matches_the_city(world: SearchWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/advocate_search.feature",
    name = "The second page of one holds the second advocate"
)]
fn the_second_page_holds_the_second_advocate(world: SearchWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/advocate_search.feature",
    name = "Malformed experience is ignored"
)]
fn malformed_experience_is_ignored(world: SearchWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/advocate_search.feature",
    name = "An unmatched specialty yields an empty envelope"
)]
fn an_unmatched_specialty_yields_an_empty_envelope(world: SearchWorld) {
    drop(world);
}
