//! Executor-level suites for the paginated list protocol.

mod paged_builder;
mod sort_contract;

use crate::{response::Page, test_support::Person};

/// Collect the ids of a page of people, in page order.
fn ids(page: &Page<Person>) -> Vec<u64> {
    page.items().iter().map(|person| person.id).collect()
}
