//! Author repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and query-by-name APIs over `authors` storage.
//! - Enforce the Author name uniqueness rule at write time.
//!
//! # Invariants
//! - Write paths re-run the Author field validators before SQL mutations.
//! - Uniqueness is pre-checked with a live lookup and backed by the
//!   `authors.name UNIQUE` constraint; both surface as
//!   `ValidationError::DuplicateAuthorName`.
//! - Read paths reject rows that violate the model instead of masking them.

use crate::model::author::{Author, AuthorId, NewAuthor};
use crate::model::validation::{validate_author_name, validate_phone_number, ValidationError};
use crate::repo::{push_pagination, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const AUTHOR_SELECT_SQL: &str = "SELECT
    id,
    name,
    phone_number,
    created_at,
    updated_at
FROM authors";

/// Query options for listing authors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorListQuery {
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for Author operations.
pub trait AuthorRepository {
    /// Inserts a new Author and returns its storage-assigned id.
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorId>;
    /// Writes every field of an existing Author back to storage.
    fn update_author(&self, author: &Author) -> RepoResult<()>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Exact, case-sensitive lookup by name.
    fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>>;
    /// Returns whether another Author (not `exclude`) already uses `name`.
    ///
    /// Pass the updated Author's id as `exclude` so keeping a name is not a clash.
    fn author_name_taken(&self, name: &str, exclude: Option<AuthorId>) -> RepoResult<bool>;
    /// Lists authors ordered by id.
    fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>>;
    /// Hard-deletes an Author. Posts are unaffected.
    fn delete_author(&self, id: AuthorId) -> RepoResult<()>;
}

/// SQLite-backed Author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn ensure_name_available(&self, name: &str, exclude: Option<AuthorId>) -> RepoResult<()> {
        if self.author_name_taken(name, exclude)? {
            return Err(ValidationError::DuplicateAuthorName(name.to_string()).into());
        }
        Ok(())
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorId> {
        validate_author_name(author.name())?;
        validate_phone_number(author.phone_number())?;
        // Not atomic with the insert; the UNIQUE constraint catches the race.
        self.ensure_name_available(author.name(), None)?;

        self.conn
            .execute(
                "INSERT INTO authors (name, phone_number) VALUES (?1, ?2);",
                params![author.name(), author.phone_number()],
            )
            .map_err(|err| map_name_conflict(err, author.name()))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_author(&self, author: &Author) -> RepoResult<()> {
        validate_author_name(author.name())?;
        validate_phone_number(author.phone_number())?;
        self.ensure_name_available(author.name(), Some(author.id()))?;

        let changed = self
            .conn
            .execute(
                "UPDATE authors
                 SET
                    name = ?1,
                    phone_number = ?2,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?3;",
                params![author.name(), author.phone_number(), author.id()],
            )
            .map_err(|err| map_name_conflict(err, author.name()))?;

        if changed == 0 {
            return Err(not_found(author.id()));
        }

        Ok(())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }
        Ok(None)
    }

    fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE name = ?1;"))?;
        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }
        Ok(None)
    }

    fn author_name_taken(&self, name: &str, exclude: Option<AuthorId>) -> RepoResult<bool> {
        let existing = self
            .conn
            .query_row(
                "SELECT id FROM authors WHERE name = ?1 LIMIT 1;",
                [name],
                |row| row.get::<_, AuthorId>(0),
            )
            .optional()?;

        Ok(match existing {
            Some(id) => Some(id) != exclude,
            None => false,
        })
    }

    fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>> {
        let mut sql = format!("{AUTHOR_SELECT_SQL} ORDER BY id ASC");
        let mut bind_values: Vec<Value> = Vec::new();
        push_pagination(&mut sql, &mut bind_values, query.limit, query.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut authors = Vec::new();

        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }

        Ok(authors)
    }

    fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM authors WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    let id: AuthorId = row.get("id")?;
    Author::from_storage(
        id,
        row.get("name")?,
        row.get("phone_number")?,
        row.get("created_at")?,
        row.get("updated_at")?,
    )
    .map_err(|err| RepoError::InvalidData(format!("authors row {id}: {err}")))
}

fn map_name_conflict(err: rusqlite::Error, name: &str) -> RepoError {
    if is_unique_violation(&err) {
        return ValidationError::DuplicateAuthorName(name.to_string()).into();
    }
    err.into()
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn not_found(id: AuthorId) -> RepoError {
    RepoError::NotFound {
        entity: "author",
        id,
    }
}
