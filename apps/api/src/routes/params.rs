//! Query-string helpers shared by the listing handlers.

/// Missing, empty and whitespace-only parameters all count as absent.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
