use serde::{Deserialize, Serialize};

use crate::expenses::repo::Expense;
use crate::model::Timestamps;

/// Request body for creating an expense.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}

/// Request body for a partial update. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

/// Expense as returned to the client.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: i64,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl From<Expense> for ExpenseResponse {
    fn from(e: Expense) -> Self {
        Self {
            id: e.id,
            category: e.category,
            amount: e.amount,
            description: e.description,
            timestamps: e.timestamps,
        }
    }
}

/// Confirmation returned after a delete.
#[derive(Debug, Serialize)]
pub struct DeleteExpenseResponse {
    pub message: String,
}
