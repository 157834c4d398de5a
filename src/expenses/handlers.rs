use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    expenses::{
        dto::{CreateExpenseRequest, DeleteExpenseResponse, ExpenseResponse, UpdateExpenseRequest},
        repo::Expense,
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/expenses", get(list_expenses))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(create_expense))
        .route("/expenses/:id", put(update_expense).delete(delete_expense))
}

#[instrument(skip(state))]
pub async fn list_expenses(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let expenses = Expense::list_by_user(&state.db, user_id).await?;
    let items = expenses.into_iter().map(ExpenseResponse::from).collect();
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
pub async fn create_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseResponse>), ApiError> {
    if payload.category.trim().is_empty() {
        warn!(user_id = %user_id, "empty category");
        return Err(ApiError::BadRequest("Category must not be empty".into()));
    }

    let expense = Expense::create(
        &state.db,
        user_id,
        &payload.category,
        payload.amount,
        payload.description.as_deref(),
    )
    .await?;

    info!(user_id = %user_id, expense_id = %expense.id, "expense created");
    Ok((StatusCode::CREATED, Json(expense.into())))
}

/// Nonexistent ids and rows owned by another user are deliberately
/// indistinguishable: both answer `NotFound`.
#[instrument(skip(state, payload))]
pub async fn update_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateExpenseRequest>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let updated = Expense::update(
        &state.db,
        user_id,
        id,
        payload.category.as_deref(),
        payload.amount,
        payload.description.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Expense not found".into()))?;

    info!(user_id = %user_id, expense_id = %id, "expense updated");
    Ok(Json(updated.into()))
}

#[instrument(skip(state))]
pub async fn delete_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<DeleteExpenseResponse>, ApiError> {
    let deleted = Expense::delete(&state.db, user_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Expense not found".into()))?;

    info!(user_id = %user_id, expense_id = %id, "expense deleted");
    Ok(Json(DeleteExpenseResponse {
        message: format!(
            "Expense deleted successfully - Category: '{}', Description: '{}'",
            deleted.category,
            deleted.description.unwrap_or_default()
        ),
    }))
}
