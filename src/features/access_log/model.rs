use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, PartialEq, Clone, Debug)]
pub struct AccessEntry {
    pub log_id: i32,
    pub user_id: Option<i32>,
    pub action: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

// wire representation, with the timestamp already rendered as text
#[derive(Serialize, Deserialize, Debug)]
pub struct JsonAccessEntry {
    pub log_id: i32,
    pub user_id: Option<i32>,
    pub action: Option<String>,
    pub created_at: Option<String>,
}

// request body for POST /access_log
// user_id is deliberately unchecked against the users table
#[derive(Deserialize, Debug, Default)]
pub struct AccessEntryDraft {
    pub user_id: Option<i32>,
    pub action: Option<String>,
}
