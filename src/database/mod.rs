use crate::features::access_log::model::{AccessEntry, AccessEntryDraft};
use crate::features::users::model::{User, UserDraft};
use crate::features::weapons::model::Weapon;
use anyhow::Result;
use async_trait::async_trait;

pub mod postgres;

// an ArmoryRepository can be shared between threads (referencable)
// sqlx::Pool is thread safe
// generic interface over the three tables, db specific implementation in
// "postgres.rs"
#[async_trait]
pub trait ArmoryRepository: Send + Sync {
    async fn create_user(&self, draft: &UserDraft) -> Result<User>;
    async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>>;
    async fn get_all_users(&self) -> Result<Vec<User>>;

    async fn create_weapon(&self, user_id: i32, weapon_rfid: &str) -> Result<Weapon>;
    async fn get_all_weapons(&self) -> Result<Vec<Weapon>>;

    async fn create_access_entry(&self, draft: &AccessEntryDraft) -> Result<AccessEntry>;
    async fn get_all_access_entries(&self) -> Result<Vec<AccessEntry>>;
}
