//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the blog data layer.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Repositories must not read/write rows before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Result alias for storage bootstrap calls.
pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening, configuring or migrating a database.
///
/// Repositories wrap this in `RepoError::Db`; callers only see it directly
/// from `open_db`/`open_db_in_memory`.
#[derive(Debug)]
pub enum DbError {
    /// Driver error from any SQLite call, including failed migration SQL.
    Sqlite(rusqlite::Error),
    /// File was written by a newer build; it is left untouched.
    UnsupportedSchemaVersion {
        /// `PRAGMA user_version` found in the file.
        db_version: u32,
        /// Highest migration this build knows.
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
