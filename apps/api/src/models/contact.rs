use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::taxonomy::Urgency;

/// A submitted contact-form message. Write-once; never updated or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub urgency: Urgency,
    pub created_at: DateTime<Utc>,
}

/// A contact request that already passed boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub urgency: Urgency,
}
