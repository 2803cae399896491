use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::fmt;
use std::time::Duration;

pub mod budget;

pub type DbThreadPool = diesel::r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub fn create_db_thread_pool(
    database_uri: &str,
    max_connections: u32,
    idle_timeout: Duration,
) -> DbThreadPool {
    let manager = ConnectionManager::<PgConnection>::new(database_uri);
    diesel::r2d2::Pool::builder()
        .max_size(max_connections)
        .idle_timeout(Some(idle_timeout))
        .build(manager)
        .expect("Failed to create database thread pool")
}

/// Applies any embedded migrations that have not yet been run against the
/// connected database. The `events` migration is ordered before `budgets` so
/// the foreign key can be created.
pub fn run_pending_migrations(db_connection: &mut PgConnection) -> Result<(), DaoError> {
    let versions = db_connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DaoError::MigrationFailure(e.to_string()))?;

    for version in versions {
        log::info!("Applied migration {}", version);
    }

    Ok(())
}

#[derive(Debug)]
pub enum DaoError {
    DbThreadPoolFailure(r2d2::Error),
    QueryFailure(diesel::result::Error),
    MigrationFailure(String),
}

impl std::error::Error for DaoError {}

impl fmt::Display for DaoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaoError::DbThreadPoolFailure(e) => {
                write!(f, "DaoError: Failed to obtain DB connection: {e}")
            }
            DaoError::QueryFailure(e) => {
                write!(f, "DaoError: Query failed: {e}")
            }
            DaoError::MigrationFailure(e) => {
                write!(f, "DaoError: Failed to run migrations: {e}")
            }
        }
    }
}

impl From<r2d2::Error> for DaoError {
    fn from(error: r2d2::Error) -> Self {
        DaoError::DbThreadPoolFailure(error)
    }
}

impl From<diesel::result::Error> for DaoError {
    fn from(error: diesel::result::Error) -> Self {
        DaoError::QueryFailure(error)
    }
}
