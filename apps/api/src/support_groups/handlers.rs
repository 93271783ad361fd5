use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{GroupType, SupportGroup};
use crate::routes::params::present;
use crate::state::AppState;
use crate::support_groups::query::{all_support_groups, support_groups_by_type};

#[derive(Debug, Default, Deserialize)]
pub struct SupportGroupQuery {
    #[serde(rename = "type")]
    pub group_type: Option<String>,
}

/// GET /api/support-groups
pub async fn handle_list_support_groups(
    State(state): State<AppState>,
    params: Result<Query<SupportGroupQuery>, QueryRejection>,
) -> Result<Json<Vec<SupportGroup>>, AppError> {
    let Query(params) = params?;
    let store = state.read_store("Failed to fetch support groups")?;

    let groups = match present(&params.group_type) {
        None => all_support_groups(&store),
        Some(raw) => match raw.parse::<GroupType>() {
            Ok(group_type) => support_groups_by_type(&store, group_type),
            Err(_) => Vec::new(),
        },
    };

    Ok(Json(groups))
}
