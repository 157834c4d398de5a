use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Creation and last-update instants shared by every persisted record.
/// Embedded by composition; mutating queries refresh `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Timestamps {
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
