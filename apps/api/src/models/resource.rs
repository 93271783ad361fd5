use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::taxonomy::{Category, Phase};

/// Educational resource (guide, checklist document or downloadable PDF).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub phase: Phase,
    pub content: String,
    pub download_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub phase: Phase,
    pub content: String,
    pub download_url: Option<String>,
    pub featured: bool,
}
