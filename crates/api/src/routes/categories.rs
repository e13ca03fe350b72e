//! Chart-of-accounts routes.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use tracing::error;

use crate::{AppState, routes::error_response};
use budgetone_db::CategoryRepository;
use budgetone_shared::AppError;

/// Creates the category routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}

/// GET /categories - The chart of accounts in declaration order.
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(categories) => Json(categories).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list categories");
            error_response(&AppError::Storage("failed to load categories".into()))
        }
    }
}
