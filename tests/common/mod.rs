//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use pushkind_pim::db::{DbPool, establish_connection_pool};
use pushkind_pim::domain::user::{NewUser, User, UserRole};
use pushkind_pim::repository::{DieselRepository, UserWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Migrated SQLite database living in its own temporary directory.
pub struct TestDb {
    path: PathBuf,
    pool: DbPool,
    // Removed (with the -wal/-shm files) when the TestDb is dropped.
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb {
            path,
            pool,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Insert an ADMIN user to act as the audit user of test writes.
pub fn admin(repo: &DieselRepository) -> User {
    repo.create_user(&NewUser::new("admin", "Admin", UserRole::Admin))
        .expect("create admin")
}
