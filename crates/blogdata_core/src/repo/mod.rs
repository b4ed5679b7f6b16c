//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for authors and posts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes re-run the model validators before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

use crate::db::DbError;
use crate::model::validation::ValidationError;
use rusqlite::types::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_repo;
pub mod post_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for author/post persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound { entity: &'static str, id: i64 },
    InvalidData(String),
}

impl RepoError {
    /// Stable, value-free label for the error variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Db(_) => "db",
            Self::NotFound { .. } => "not_found",
            Self::InvalidData(_) => "invalid_data",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Appends `LIMIT`/`OFFSET` clauses and their bind values.
///
/// SQLite needs a `LIMIT` before `OFFSET`, so `-1` stands in for "no limit".
pub(crate) fn push_pagination(
    sql: &mut String,
    bind_values: &mut Vec<Value>,
    limit: Option<u32>,
    offset: u32,
) {
    match limit {
        Some(limit) => {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
        }
        None if offset > 0 => sql.push_str(" LIMIT -1"),
        None => return,
    }
    if offset > 0 {
        sql.push_str(" OFFSET ?");
        bind_values.push(Value::Integer(i64::from(offset)));
    }
}

#[cfg(test)]
mod tests {
    use super::{push_pagination, RepoError};
    use crate::db::DbError;
    use rusqlite::types::Value;

    #[test]
    fn kind_never_includes_error_text() {
        let invalid = RepoError::InvalidData("posts row 1: Category 'Drama'".to_string());
        assert_eq!(invalid.kind(), "invalid_data");
        let db = RepoError::Db(DbError::UnsupportedSchemaVersion {
            db_version: 9,
            latest_supported: 1,
        });
        assert_eq!(db.kind(), "db");
    }

    #[test]
    fn pagination_without_limit_or_offset_is_noop() {
        let mut sql = String::from("SELECT 1");
        let mut binds = Vec::new();
        push_pagination(&mut sql, &mut binds, None, 0);
        assert_eq!(sql, "SELECT 1");
        assert!(binds.is_empty());
    }

    #[test]
    fn pagination_offset_only_uses_unbounded_limit() {
        let mut sql = String::from("SELECT 1");
        let mut binds = Vec::new();
        push_pagination(&mut sql, &mut binds, None, 3);
        assert_eq!(sql, "SELECT 1 LIMIT -1 OFFSET ?");
        assert_eq!(binds, vec![Value::Integer(3)]);
    }

    #[test]
    fn pagination_binds_limit_then_offset() {
        let mut sql = String::new();
        let mut binds = Vec::new();
        push_pagination(&mut sql, &mut binds, Some(5), 10);
        assert_eq!(sql, " LIMIT ? OFFSET ?");
        assert_eq!(binds, vec![Value::Integer(5), Value::Integer(10)]);
    }
}
