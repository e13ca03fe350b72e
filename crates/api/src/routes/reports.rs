//! Consolidated reporting routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::error;

use crate::{AppState, routes::error_response};
use budgetone_core::report::{self, ReportError};
use budgetone_db::{BudgetRepository, CategoryRepository, LocationRepository};
use budgetone_shared::AppError;

/// Creates the report routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/consolidated", get(consolidated_report))
}

/// GET /reports/consolidated - Chart-ordered totals summed across every location.
async fn consolidated_report(State(state): State<AppState>) -> impl IntoResponse {
    let categories = match CategoryRepository::new((*state.db).clone()).list().await {
        Ok(categories) => categories,
        Err(e) => {
            error!(error = %e, "Failed to load chart of accounts");
            return error_response(&AppError::Storage("failed to load categories".into()));
        }
    };

    let locations = match LocationRepository::new((*state.db).clone()).list().await {
        Ok(locations) => locations,
        Err(e) => {
            error!(error = %e, "Failed to load locations");
            return error_response(&AppError::Storage("failed to load locations".into()));
        }
    };

    let records = match BudgetRepository::new((*state.db).clone())
        .list_records(None)
        .await
    {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Failed to load budget records");
            return error_response(&AppError::Storage("failed to load budget records".into()));
        }
    };

    match report::consolidate(&categories, &locations, &records) {
        Ok(report) => Json(report).into_response(),
        Err(e @ ReportError::MixedCurrencies(..)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "mixed_currencies",
                "message": e.to_string()
            })),
        )
            .into_response(),
        Err(e @ ReportError::UnknownLocation(_)) => {
            // A record referencing a missing location means the store itself
            // is inconsistent.
            error!(error = %e, "Budget record points at a missing location");
            error_response(&AppError::Storage(e.to_string()))
        }
    }
}
