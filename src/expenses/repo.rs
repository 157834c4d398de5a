use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::model::Timestamps;

/// Expense row, owned by exactly one user. Every query here filters by
/// `user_id`, so a row is invisible outside its owner's identity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Category and description of a removed row, for the delete confirmation.
#[derive(Debug, FromRow)]
pub struct DeletedExpense {
    pub category: String,
    pub description: Option<String>,
}

impl Expense {
    /// All expenses owned by the user, in primary-key order.
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> anyhow::Result<Vec<Expense>> {
        let rows = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, user_id, category, amount, description, created_at, updated_at
            FROM expenses
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: i64,
        category: &str,
        amount: f64,
        description: Option<&str>,
    ) -> anyhow::Result<Expense> {
        let row = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (user_id, category, amount, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, category, amount, description, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(category)
        .bind(amount)
        .bind(description)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Partial update in a single atomic statement; absent fields keep their
    /// value, `updated_at` refreshes. Returns `None` when no row matches the
    /// id and owner.
    pub async fn update(
        db: &PgPool,
        user_id: i64,
        expense_id: i64,
        category: Option<&str>,
        amount: Option<f64>,
        description: Option<&str>,
    ) -> anyhow::Result<Option<Expense>> {
        let row = sqlx::query_as::<_, Expense>(
            r#"
            UPDATE expenses
            SET category = COALESCE($3, category),
                amount = COALESCE($4, amount),
                description = COALESCE($5, description),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, category, amount, description, created_at, updated_at
            "#,
        )
        .bind(expense_id)
        .bind(user_id)
        .bind(category)
        .bind(amount)
        .bind(description)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Returns `None` when no row matches the id and owner.
    pub async fn delete(
        db: &PgPool,
        user_id: i64,
        expense_id: i64,
    ) -> anyhow::Result<Option<DeletedExpense>> {
        let row = sqlx::query_as::<_, DeletedExpense>(
            r#"
            DELETE FROM expenses
            WHERE id = $1 AND user_id = $2
            RETURNING category, description
            "#,
        )
        .bind(expense_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
