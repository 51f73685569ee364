use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tag: Option<String>,
    /// Owning user. Always set from the authenticated caller at creation.
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
