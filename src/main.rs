use crate::config::ArmoryConfig;
use crate::database::ArmoryRepository;
use crate::database::postgres::PostgresRepository;
use axum::{Router, routing::get};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

pub mod config;
mod database;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ArmoryRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = ArmoryConfig::from_env();

    // connect lazily so an unreachable database doesn't stop the server
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy(&config.database_url())?;

    // test database connection, advisory only
    match sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
        .fetch_one(&pool)
        .await
    {
        Ok(now) => println!("Connected to PostgreSQL at: {}", now),
        Err(e) => eprintln!("Error executing connectivity check: {}", e),
    }

    let app_state = AppState {
        repo: Arc::new(PostgresRepository::new(pool)),
    };

    println!("Starting server...");

    // router setup, where features are composed
    let app = Router::new()
        .route("/", get(welcome_handler))
        .nest("/users", features::users::users_router())
        .nest("/weapons", features::weapons::weapons_router())
        .nest("/access_log", features::access_log::access_log_router())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:5001").await?;
    println!("Server listening on http://0.0.0.0:5001");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn welcome_handler() -> &'static str {
    "Welcome to the RFID Database Application"
}
