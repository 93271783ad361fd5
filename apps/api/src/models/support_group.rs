use serde::{Deserialize, Serialize};

use crate::models::taxonomy::GroupType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportGroup {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    pub contact_info: String,
    pub schedule: Option<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSupportGroup {
    pub name: String,
    pub description: String,
    pub group_type: GroupType,
    pub contact_info: String,
    pub schedule: Option<String>,
    pub languages: Vec<String>,
}
