//! Author domain model.
//!
//! # Responsibility
//! - Define the persisted Author record and its insert payload.
//! - Run field validators on construction and on every setter call.
//!
//! # Invariants
//! - `name` is never blank and `phone_number` is always ten ASCII digits.
//! - Name uniqueness is not checkable here; repositories enforce it.
//! - A failed setter leaves the record unchanged.

use crate::model::validation::{validate_author_name, validate_phone_number, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage-assigned Author identity.
pub type AuthorId = i64;

/// Validated payload for inserting a new Author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorFields")]
pub struct NewAuthor {
    name: String,
    phone_number: String,
}

impl NewAuthor {
    /// Builds an insert payload after running the Author field validators.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let phone_number = phone_number.into();
        validate_author_name(&name)?;
        validate_phone_number(&phone_number)?;
        Ok(Self { name, phone_number })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

#[derive(Deserialize)]
struct AuthorFields {
    name: String,
    phone_number: String,
}

impl TryFrom<AuthorFields> for NewAuthor {
    type Error = ValidationError;

    fn try_from(value: AuthorFields) -> Result<Self, Self::Error> {
        Self::new(value.name, value.phone_number)
    }
}

/// Persisted Author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    id: AuthorId,
    name: String,
    phone_number: String,
    /// Unix epoch milliseconds, assigned on insert.
    created_at: i64,
    /// Unix epoch milliseconds of the last update; `None` until first update.
    updated_at: Option<i64>,
}

impl Author {
    /// Rebuilds an Author from persisted columns, re-running field validators.
    pub(crate) fn from_storage(
        id: AuthorId,
        name: String,
        phone_number: String,
        created_at: i64,
        updated_at: Option<i64>,
    ) -> Result<Self, ValidationError> {
        validate_author_name(&name)?;
        validate_phone_number(&phone_number)?;
        Ok(Self {
            id,
            name,
            phone_number,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<i64> {
        self.updated_at
    }

    /// Replaces the name after the blank-name check.
    ///
    /// Uniqueness is re-checked when the record is written back.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_phone_number(
        &mut self,
        phone_number: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let phone_number = phone_number.into();
        validate_phone_number(&phone_number)?;
        self.phone_number = phone_number;
        Ok(())
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Author(id={}, name={})", self.id, self.name)
    }
}

#[derive(Deserialize)]
struct AuthorRecord {
    id: AuthorId,
    name: String,
    phone_number: String,
    created_at: i64,
    updated_at: Option<i64>,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = ValidationError;

    fn try_from(value: AuthorRecord) -> Result<Self, Self::Error> {
        Self::from_storage(
            value.id,
            value.name,
            value.phone_number,
            value.created_at,
            value.updated_at,
        )
    }
}
