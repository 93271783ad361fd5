// Resource library: listing, single fetch, search and category counts.

pub mod handlers;
pub mod query;
