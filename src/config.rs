use std::env;

/// Runtime settings read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Username of the audit user created by `pim-seed`.
    pub system_username: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = env::var("PORT").unwrap_or("8080".to_string());
        let port = match port.parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                log::warn!("Invalid PORT value `{port}`, falling back to 8080");
                8080
            }
        };

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or("app.db".to_string()),
            address: env::var("ADDRESS").unwrap_or("127.0.0.1".to_string()),
            port,
            system_username: env::var("SYSTEM_USERNAME").unwrap_or("system".to_string()),
        }
    }
}
