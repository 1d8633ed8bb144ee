//! Error types for the shared infrastructure layer

use thiserror::Error;

/// Failure modes of the shared PostgreSQL layer: building the pool,
/// validating its configuration, and bringing the schema up to date.
/// Query failures inside the services surface through the services' own
/// error types.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The pool could not be built or the server refused the connection
    #[error("could not connect to PostgreSQL: {0}")]
    Connection(#[source] sqlx::Error),

    /// Applying schema migrations failed
    #[error("schema migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),

    /// An environment variable held a value the pool cannot be built from
    #[error("invalid database configuration: {0}")]
    Configuration(String),
}

/// Result alias for the shared database layer
pub type DatabaseResult<T> = Result<T, DatabaseError>;
