pub mod health;
pub mod params;

use axum::{
    routing::{get, post},
    Router,
};

use crate::checklist::handlers as checklist;
use crate::contact::handlers as contact;
use crate::resources::handlers as resources;
use crate::state::AppState;
use crate::support_groups::handlers as support_groups;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resource library
        .route("/api/resources", get(resources::handle_list_resources))
        .route(
            "/api/resources/categories",
            get(resources::handle_resource_categories),
        )
        .route("/api/resources/:id", get(resources::handle_get_resource))
        .route("/api/search", get(resources::handle_search))
        // Recovery checklist
        .route("/api/checklist", get(checklist::handle_list_checklist))
        // Family support
        .route(
            "/api/support-groups",
            get(support_groups::handle_list_support_groups),
        )
        .route("/api/contact", post(contact::handle_submit_contact))
        .with_state(state)
}
