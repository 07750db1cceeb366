#[derive(Clone, Debug)]
pub struct ArmoryConfig {
    pub db_host: String,
    pub db_port: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub max_connections: u32,
}

impl ArmoryConfig {
    pub fn from_env() -> Self {
        let db_host = std::env::var("DB_HOST")
            .expect("Failed to determine DB_HOST from environment variables");

        let db_port = std::env::var("DB_PORT")
            .expect("Failed to determine DB_PORT from environment variables");

        let db_user = std::env::var("DB_USER")
            .expect("Failed to determine DB_USER from environment variables");

        let db_password = std::env::var("DB_PASSWORD")
            .expect("Failed to determine DB_PASSWORD from environment variables");

        let db_name = std::env::var("DB_NAME")
            .expect("Failed to determine DB_NAME from environment variables");

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        Self {
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
            max_connections,
        }
    }

    // sqlx wants a single connection URL, the environment provides the parts
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}
