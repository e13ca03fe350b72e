//! Budget ledger routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser, routes::error_response};
use budgetone_db::{
    BudgetRepository, CategoryRepository, LocationRepository,
    repositories::{BudgetError, CategoryError},
};
use budgetone_shared::AppError;

/// Creates the budget routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets))
        .route("/budgets/entries", post(save_budget_entry))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing budget records.
#[derive(Debug, Deserialize)]
pub struct ListBudgetsQuery {
    /// Restrict to one location.
    pub location_id: Option<Uuid>,
}

/// Request body for a single budget entry.
#[derive(Debug, Deserialize)]
pub struct SaveBudgetEntryRequest {
    /// Target location; managers may omit it to target their own location.
    pub location_id: Option<Uuid>,
    /// Target category.
    pub category_id: Uuid,
    /// Month slot, 0-11.
    pub month_index: usize,
    /// Amount for the month; an absent amount clears the slot to zero.
    pub amount: Option<Decimal>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolves which location the caller is allowed to touch.
///
/// Admins may address any existing location but must name one. Managers
/// always act on their own location; naming any other is forbidden, and
/// having none blocks the write entirely.
async fn resolve_location(
    state: &AppState,
    user: &AuthUser,
    requested: Option<Uuid>,
) -> Result<Uuid, axum::response::Response> {
    let repo = LocationRepository::new((*state.db).clone());

    if user.is_admin() {
        let Some(id) = requested else {
            return Err(error_response(&AppError::Validation(
                "location_id is required for administrators".into(),
            )));
        };
        return match repo.find_by_id(id).await {
            Ok(Some(_)) => Ok(id),
            Ok(None) => Err(error_response(&AppError::NotFound(format!(
                "location {id} does not exist"
            )))),
            Err(e) => {
                error!(error = %e, "Failed to look up location");
                Err(error_response(&AppError::Storage(
                    "failed to load locations".into(),
                )))
            }
        };
    }
    let own = match repo.find_by_manager(user.user_id()).await {
        Ok(Some(location)) => location,
        Ok(None) => {
            return Err(error_response(&AppError::NotAssigned(
                "no location is assigned to this user".into(),
            )));
        }
        Err(e) => {
            error!(error = %e, "Failed to look up manager location");
            return Err(error_response(&AppError::Storage(
                "failed to load locations".into(),
            )));
        }
    };

    match requested {
        Some(id) if id != own.id.into_inner() => Err(error_response(&AppError::Forbidden(
            "managers may only enter figures for their own location".into(),
        ))),
        _ => Ok(own.id.into_inner()),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /budgets - Budget records, optionally filtered by location.
async fn list_budgets(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListBudgetsQuery>,
) -> impl IntoResponse {
    // Admins may list everything; managers always resolve to their own location.
    let location_id = if user.is_admin() {
        query.location_id
    } else {
        match resolve_location(&state, &user, query.location_id).await {
            Ok(id) => Some(id),
            Err(response) => return response,
        }
    };

    let repo = BudgetRepository::new((*state.db).clone());
    match repo.list_records(location_id).await {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list budget records");
            error_response(&AppError::Storage("failed to load budget records".into()))
        }
    }
}

/// POST /budgets/entries - Set one monthly amount for a (location, category) pair.
async fn save_budget_entry(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SaveBudgetEntryRequest>,
) -> impl IntoResponse {
    let location_id = match resolve_location(&state, &user, payload.location_id).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    // The category must exist before a record is created for it.
    match CategoryRepository::new((*state.db).clone())
        .find_by_id(payload.category_id)
        .await
    {
        Ok(_) => {}
        Err(CategoryError::NotFound(id)) => {
            return error_response(&AppError::NotFound(format!("category {id} does not exist")));
        }
        Err(e) => {
            error!(error = %e, "Failed to look up category");
            return error_response(&AppError::Storage("failed to load categories".into()));
        }
    }

    // An empty amount field means "clear this month".
    let amount = payload.amount.unwrap_or(Decimal::ZERO);

    let repo = BudgetRepository::new((*state.db).clone());
    match repo
        .upsert_monthly_amount(location_id, payload.category_id, payload.month_index, amount)
        .await
    {
        Ok(record) => {
            info!(
                location_id = %location_id,
                category_id = %payload.category_id,
                month_index = payload.month_index,
                "Budget entry saved"
            );
            (StatusCode::OK, Json(json!({ "success": true, "record": record }))).into_response()
        }
        Err(BudgetError::Validation(e)) => {
            error_response(&AppError::Validation(e.to_string()))
        }
        Err(e) if e.is_unique_violation() => {
            // A concurrent first write for the same pair won the insert race.
            error_response(&AppError::Conflict(
                "a budget record for this location and category was created concurrently".into(),
            ))
        }
        Err(e) => {
            error!(error = %e, "Failed to save budget entry");
            error_response(&AppError::Storage("failed to save budget entry".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_entry_request_parses_full_body() {
        let body = serde_json::json!({
            "location_id": "018f3b0a-0000-7000-8000-000000000001",
            "category_id": "018f3b0a-0000-7000-8000-000000000002",
            "month_index": 3,
            "amount": "150.50"
        });
        let request: SaveBudgetEntryRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.month_index, 3);
        assert_eq!(request.amount, Some(dec!(150.50)));
        assert!(request.location_id.is_some());
    }

    #[test]
    fn test_entry_request_allows_omitted_location_and_amount() {
        let body = serde_json::json!({
            "category_id": "018f3b0a-0000-7000-8000-000000000002",
            "month_index": 0
        });
        let request: SaveBudgetEntryRequest = serde_json::from_value(body).unwrap();
        assert!(request.location_id.is_none());
        assert!(request.amount.is_none());
    }
}
