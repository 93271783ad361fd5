use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::config::FilterMode;
use crate::errors::{AppError, FieldError};
use crate::models::{Category, Phase, Resource};
use crate::resources::query::{
    all_resources, category_summaries, featured_resources, get_resource, resources_by_category,
    resources_by_phase, search_resources, CategorySummary, ResourceFilter,
};
use crate::routes::params::present;
use crate::state::AppState;
use crate::store::Store;

#[derive(Debug, Default, Deserialize)]
pub struct ResourceListQuery {
    pub category: Option<String>,
    pub phase: Option<String>,
    pub featured: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Builds the AND-composed filter used in combined mode.
///
/// Returns `None` when a parameter names a value outside its enumeration:
/// such a filter can match nothing, so the listing is empty rather than an error.
pub fn combined_filter(params: &ResourceListQuery) -> Option<ResourceFilter> {
    Some(ResourceFilter {
        category: present(&params.category)
            .map(str::parse::<Category>)
            .transpose()
            .ok()?,
        phase: present(&params.phase)
            .map(str::parse::<Phase>)
            .transpose()
            .ok()?,
        featured_only: is_featured(params),
        search: present(&params.q).map(str::to_string),
    })
}

/// Only the literal `true` turns the featured filter on.
fn is_featured(params: &ResourceListQuery) -> bool {
    params.featured.as_deref() == Some("true")
}

pub fn list_resources(store: &Store, params: &ResourceListQuery, mode: FilterMode) -> Vec<Resource> {
    match mode {
        FilterMode::Combined => combined_filter(params)
            .map(|filter| filter.apply(store))
            .unwrap_or_default(),
        FilterMode::Precedence => {
            if is_featured(params) {
                featured_resources(store)
            } else if let Some(raw) = present(&params.category) {
                raw.parse::<Category>()
                    .map(|c| resources_by_category(store, c))
                    .unwrap_or_default()
            } else if let Some(raw) = present(&params.phase) {
                raw.parse::<Phase>()
                    .map(|p| resources_by_phase(store, p))
                    .unwrap_or_default()
            } else {
                all_resources(store)
            }
        }
    }
}

/// GET /api/resources
pub async fn handle_list_resources(
    State(state): State<AppState>,
    params: Result<Query<ResourceListQuery>, QueryRejection>,
) -> Result<Json<Vec<Resource>>, AppError> {
    let Query(params) = params?;
    let store = state.read_store("Failed to fetch resources")?;

    Ok(Json(list_resources(&store, &params, state.filter_mode())))
}

/// `Ok(None)` for a well-formed id too large to exist; 400 for anything non-numeric.
pub fn parse_resource_id(raw: &str) -> Result<Option<u64>, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::invalid_fields(vec![FieldError::new(
            "id",
            "Resource id must be a non-negative integer",
        )]));
    }
    Ok(raw.parse::<u64>().ok())
}

/// GET /api/resources/:id
pub async fn handle_get_resource(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Resource>, AppError> {
    let Path(raw) = id?;
    let not_found = || AppError::NotFound("Resource not found".to_string());

    // an all-digit id beyond u64 can never have been assigned
    let Some(id) = parse_resource_id(&raw)? else {
        return Err(not_found());
    };
    let store = state.read_store("Failed to fetch resource")?;

    get_resource(&store, id).map(Json).ok_or_else(not_found)
}

/// GET /api/resources/categories
///
/// Per-category counts for the resource library landing cards.
pub async fn handle_resource_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategorySummary>>, AppError> {
    let store = state.read_store("Failed to fetch resource categories")?;
    Ok(Json(category_summaries(&store)))
}

/// GET /api/search
pub async fn handle_search(
    State(state): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Resource>>, AppError> {
    let Query(params) = params?;
    let query = present(&params.q).ok_or_else(|| AppError::validation("Search query is required"))?;

    let store = state.read_store("Search failed")?;
    let results = search_resources(&store, query);
    tracing::debug!(query, hits = results.len(), "Resource search");

    Ok(Json(results))
}
