// Recovery checklist: items ordered by order index, filtered by phase and week.

pub mod handlers;
pub mod query;
