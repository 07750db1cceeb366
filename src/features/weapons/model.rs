use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Eq, PartialEq, Clone, Debug)]
pub struct Weapon {
    pub weapon_id: i32,
    pub user_id: i32,
    pub weapon_rfid: String,
}

// request body for POST /weapons, checked by the handler before any insert
#[derive(Deserialize, Debug, Default)]
pub struct WeaponDraft {
    pub user_id: Option<i32>,
    pub weapon_rfid: Option<String>,
}
