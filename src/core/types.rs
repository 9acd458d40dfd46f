use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single blog post row from the `board` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Board {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub username: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Fields posted by the create and edit forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardForm {
    pub title: String,
    pub content: String,
    pub username: String,
}
