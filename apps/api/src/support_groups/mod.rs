pub mod handlers;
pub mod query;
