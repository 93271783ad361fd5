use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::checklist::query::{
    all_checklist_items, checklist_items_by_phase, checklist_items_by_week, ChecklistFilter,
};
use crate::config::FilterMode;
use crate::errors::{AppError, FieldError};
use crate::models::{ChecklistItem, Phase};
use crate::routes::params::present;
use crate::state::AppState;
use crate::store::Store;

#[derive(Debug, Default, Deserialize)]
pub struct ChecklistQuery {
    pub phase: Option<String>,
    pub week: Option<String>,
}

fn parse_week(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(week) if week > 0 => Ok(week),
        _ => Err(AppError::invalid_fields(vec![FieldError::new(
            "week",
            "Week must be a positive integer",
        )])),
    }
}

/// A phase outside the enumeration matches nothing; a malformed week is a 400.
pub fn list_checklist(
    store: &Store,
    params: &ChecklistQuery,
    mode: FilterMode,
) -> Result<Vec<ChecklistItem>, AppError> {
    let phase = present(&params.phase);
    let week = present(&params.week);

    match mode {
        FilterMode::Combined => {
            let week = week.map(parse_week).transpose()?;
            let Ok(phase) = phase.map(str::parse::<Phase>).transpose() else {
                return Ok(Vec::new());
            };
            Ok(ChecklistFilter { phase, week }.apply(store))
        }
        FilterMode::Precedence => {
            if let Some(raw) = phase {
                Ok(raw
                    .parse::<Phase>()
                    .map(|p| checklist_items_by_phase(store, p))
                    .unwrap_or_default())
            } else if let Some(raw) = week {
                Ok(checklist_items_by_week(store, parse_week(raw)?))
            } else {
                Ok(all_checklist_items(store))
            }
        }
    }
}

/// GET /api/checklist
pub async fn handle_list_checklist(
    State(state): State<AppState>,
    params: Result<Query<ChecklistQuery>, QueryRejection>,
) -> Result<Json<Vec<ChecklistItem>>, AppError> {
    let Query(params) = params?;
    let store = state.read_store("Failed to fetch checklist items")?;
    let items = list_checklist(&store, &params, state.filter_mode())?;
    Ok(Json(items))
}
