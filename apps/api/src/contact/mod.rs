// Contact form: boundary validation and write-once storage of submissions.

pub mod handlers;
pub mod validation;
