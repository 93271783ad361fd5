use serde::{Deserialize, Serialize};

use crate::models::taxonomy::Phase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub phase: Phase,
    pub week: u32,
    /// Display position within a phase/week. Not enforced unique.
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewChecklistItem {
    pub title: String,
    pub description: String,
    pub phase: Phase,
    pub week: u32,
    pub order_index: i32,
}
