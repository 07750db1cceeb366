use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Eq, PartialEq, Clone, Debug)]
pub struct User {
    pub user_id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub rank: Option<String>,
    pub address: Option<String>,
    pub rfid_number: Option<String>,
}

// request body for POST /users
// every field is optional on purpose: an absent field flows to the database
// as NULL and is judged by the column constraints, not by us
#[derive(Deserialize, Debug, Default)]
pub struct UserDraft {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub rank: Option<String>,
    pub address: Option<String>,
    pub rfid_number: Option<String>,
}
