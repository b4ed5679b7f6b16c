//! Post domain model.
//!
//! # Responsibility
//! - Define the persisted Post record, its insert payload and `Category`.
//! - Run field validators on construction and on every setter call.
//!
//! # Invariants
//! - `title` is non-blank and contains at least one clickbait phrase.
//! - `content` has at least 250 characters.
//! - `summary`, when present, has at most 250 characters.
//! - A failed setter leaves the record unchanged.

use crate::model::validation::{
    validate_post_content, validate_post_summary, validate_post_title, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage-assigned Post identity.
pub type PostId = i64;

/// Closed set of Post categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    /// Parses the exact category label. No trimming or case folding.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "Fiction" => Ok(Self::Fiction),
            "Non-Fiction" => Ok(Self::NonFiction),
            other => Err(ValidationError::InvalidCategory(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated payload for inserting a new Post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostFields")]
pub struct NewPost {
    title: String,
    content: String,
    summary: Option<String>,
    category: Category,
}

impl NewPost {
    /// Builds an insert payload after running every Post field validator.
    ///
    /// Validators run in field order: title, content, summary, category.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        summary: Option<String>,
        category: &str,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let content = content.into();
        validate_post_title(&title)?;
        validate_post_content(&content)?;
        validate_post_summary(summary.as_deref())?;
        let category = Category::parse(category)?;
        Ok(Self {
            title,
            content,
            summary,
            category,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

// Category arrives as free text so that unknown labels surface as
// `ValidationError::InvalidCategory` instead of a serde variant error.
#[derive(Deserialize)]
struct PostFields {
    title: String,
    content: String,
    #[serde(default)]
    summary: Option<String>,
    category: String,
}

impl TryFrom<PostFields> for NewPost {
    type Error = ValidationError;

    fn try_from(value: PostFields) -> Result<Self, Self::Error> {
        Self::new(value.title, value.content, value.summary, &value.category)
    }
}

/// Persisted Post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostRecord")]
pub struct Post {
    id: PostId,
    title: String,
    content: String,
    summary: Option<String>,
    category: Category,
    created_at: i64,
    updated_at: Option<i64>,
}

impl Post {
    pub(crate) fn from_storage(
        id: PostId,
        draft: NewPost,
        created_at: i64,
        updated_at: Option<i64>,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            summary: draft.summary,
            category: draft.category,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Unix epoch milliseconds, assigned on insert.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Unix epoch milliseconds of the last update; `None` until first update.
    pub fn updated_at(&self) -> Option<i64> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validate_post_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        let content = content.into();
        validate_post_content(&content)?;
        self.content = content;
        Ok(())
    }

    /// Passing `None` clears the summary.
    pub fn set_summary(&mut self, summary: Option<String>) -> Result<(), ValidationError> {
        validate_post_summary(summary.as_deref())?;
        self.summary = summary;
        Ok(())
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), ValidationError> {
        self.category = Category::parse(category)?;
        Ok(())
    }
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Post(id={}, title={}, content={}, summary={})",
            self.id,
            self.title,
            self.content,
            self.summary.as_deref().unwrap_or("None")
        )
    }
}

#[derive(Deserialize)]
struct PostRecord {
    id: PostId,
    title: String,
    content: String,
    #[serde(default)]
    summary: Option<String>,
    category: String,
    created_at: i64,
    updated_at: Option<i64>,
}

impl TryFrom<PostRecord> for Post {
    type Error = ValidationError;

    fn try_from(value: PostRecord) -> Result<Self, Self::Error> {
        let draft = NewPost::new(value.title, value.content, value.summary, &value.category)?;
        Ok(Self::from_storage(
            value.id,
            draft,
            value.created_at,
            value.updated_at,
        ))
    }
}
