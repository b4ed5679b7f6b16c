//! Author use-case service.
//!
//! # Responsibility
//! - Provide create/rename/re-number/get/list/delete entry points.
//! - Apply per-field updates so only the touched field is re-validated.
//!
//! # Invariants
//! - Every write goes through `AuthorRepository`, which owns the name
//!   uniqueness check.
//! - Renaming an Author to its current name is accepted.

use crate::model::author::{Author, AuthorId, NewAuthor};
use crate::repo::author_repo::{AuthorListQuery, AuthorRepository};
use crate::repo::{RepoError, RepoResult};
use crate::service::log_outcome;

/// Use-case service wrapper for Author operations.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates, checks name uniqueness, inserts and reads back one Author.
    pub fn create_author(
        &self,
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> RepoResult<Author> {
        let result = NewAuthor::new(name, phone_number)
            .map_err(RepoError::from)
            .and_then(|draft| self.repo.create_author(&draft))
            .and_then(|id| self.read_back(id));
        log_outcome("author_create", None, result)
    }

    /// Replaces the name of an existing Author.
    ///
    /// Renaming to the current name succeeds: the uniqueness lookup skips
    /// the Author's own row instead of treating it as a clash.
    pub fn rename_author(&self, id: AuthorId, name: impl Into<String>) -> RepoResult<Author> {
        let name = name.into();
        let result = self.modify(id, |author| author.set_name(name).map_err(RepoError::from));
        log_outcome("author_update", Some(id), result)
    }

    /// Replaces the phone number of an existing Author.
    pub fn change_phone_number(
        &self,
        id: AuthorId,
        phone_number: impl Into<String>,
    ) -> RepoResult<Author> {
        let phone_number = phone_number.into();
        let result = self.modify(id, |author| {
            author
                .set_phone_number(phone_number)
                .map_err(RepoError::from)
        });
        log_outcome("author_update", Some(id), result)
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    pub fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>> {
        self.repo.find_author_by_name(name)
    }

    pub fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>> {
        self.repo.list_authors(query)
    }

    pub fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        log_outcome("author_delete", Some(id), self.repo.delete_author(id))
    }

    fn modify(
        &self,
        id: AuthorId,
        apply: impl FnOnce(&mut Author) -> RepoResult<()>,
    ) -> RepoResult<Author> {
        let mut author = self.repo.get_author(id)?.ok_or(RepoError::NotFound {
            entity: "author",
            id,
        })?;
        apply(&mut author)?;
        self.repo.update_author(&author)?;
        self.read_back(id)
    }

    fn read_back(&self, id: AuthorId) -> RepoResult<Author> {
        self.repo.get_author(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("author {id} missing in read-back after write"))
        })
    }
}
