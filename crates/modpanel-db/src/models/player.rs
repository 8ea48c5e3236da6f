//! Active player database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ActivePlayerModel {
    pub user_id: i64,
    pub name: String,
    pub last_seen: DateTime<Utc>,
}
