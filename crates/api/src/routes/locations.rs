//! Location routes.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use tracing::error;

use crate::{AppState, middleware::AuthUser, routes::error_response};
use budgetone_db::LocationRepository;
use budgetone_shared::AppError;

/// Creates the location routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(list_locations))
        .route("/locations/mine", get(my_location))
}

/// GET /locations - All locations.
async fn list_locations(State(state): State<AppState>) -> impl IntoResponse {
    let repo = LocationRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(locations) => Json(locations).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list locations");
            error_response(&AppError::Storage("failed to load locations".into()))
        }
    }
}

/// GET /locations/mine - The location managed by the authenticated user.
async fn my_location(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    let repo = LocationRepository::new((*state.db).clone());

    match repo.find_by_manager(user.user_id()).await {
        Ok(Some(location)) => Json(location).into_response(),
        Ok(None) => error_response(&AppError::NotAssigned(
            "no location is assigned to this user".into(),
        )),
        Err(e) => {
            error!(error = %e, "Failed to look up manager location");
            error_response(&AppError::Storage("failed to load locations".into()))
        }
    }
}
