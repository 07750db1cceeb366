use crate::database::ArmoryRepository;
use crate::features::access_log::model::{AccessEntry, AccessEntryDraft};
use crate::features::users::model::{User, UserDraft};
use crate::features::weapons::model::Weapon;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

pub struct PostgresRepository {
    pool: Pool<Postgres>,
}

impl PostgresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArmoryRepository for PostgresRepository {
    async fn create_user(&self, draft: &UserDraft) -> Result<User> {
        // absent fields bind as NULL, the schema decides whether that's legal
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, age, rank, address, rfid_number)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(draft.name.as_deref())
        .bind(draft.age)
        .bind(draft.rank.as_deref())
        .bind(draft.address.as_deref())
        .bind(draft.rfid_number.as_deref())
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert user")
    }

    async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn create_weapon(&self, user_id: i32, weapon_rfid: &str) -> Result<Weapon> {
        sqlx::query_as::<_, Weapon>(
            r#"
            INSERT INTO weapons (user_id, weapon_rfid)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(weapon_rfid)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert weapon")
    }

    async fn get_all_weapons(&self) -> Result<Vec<Weapon>> {
        let weapons = sqlx::query_as::<_, Weapon>("SELECT * FROM weapons")
            .fetch_all(&self.pool)
            .await?;

        Ok(weapons)
    }

    async fn create_access_entry(&self, draft: &AccessEntryDraft) -> Result<AccessEntry> {
        // created_at comes from the column default, not from us
        sqlx::query_as::<_, AccessEntry>(
            r#"
            INSERT INTO access_log (user_id, action)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(draft.user_id)
        .bind(draft.action.as_deref())
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert access log entry")
    }

    async fn get_all_access_entries(&self) -> Result<Vec<AccessEntry>> {
        let entries = sqlx::query_as::<_, AccessEntry>("SELECT * FROM access_log")
            .fetch_all(&self.pool)
            .await?;

        Ok(entries)
    }
}
