use diesel::QueryResult;
use diesel::connection::SimpleConnection;
use diesel::sqlite::SqliteConnection;

pub use pushkind_common::db::{DbConnection, DbPool, establish_connection_pool};

/// Turn on foreign key enforcement for `conn`.
///
/// SQLite keeps the pragma per connection, so it is applied every time a
/// connection is checked out of the shared pool.
pub fn enable_foreign_keys(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
}
