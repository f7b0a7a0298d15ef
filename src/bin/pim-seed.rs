//! Creates the SYSTEM user that owns automated catalog writes.
//!
//! Safe to run repeatedly: an existing user with the configured name is
//! returned untouched.

use pushkind_pim::config::ServerConfig;
use pushkind_pim::db::establish_connection_pool;
use pushkind_pim::repository::{DieselRepository, UserWriter};

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    match repo.seed_system_user(&config.system_username) {
        Ok(user) => println!("{} {}", user.id, user.username),
        Err(e) => {
            log::error!("Failed to seed system user `{}`: {e}", config.system_username);
            std::process::exit(1);
        }
    }
}
