//! Field-level validation rules shared by Author and Post records.
//!
//! # Responsibility
//! - Hold the pure predicate checks run before a field value is committed.
//! - Produce one `ValidationError` variant per rule with a stable message.
//!
//! # Invariants
//! - Validators never touch storage. The Author name uniqueness rule is
//!   checked by the repository layer and reported through
//!   `ValidationError::DuplicateAuthorName`.
//! - Lengths are counted in Unicode scalar values, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Required length of an Author phone number.
pub const PHONE_NUMBER_DIGITS: usize = 10;
/// Minimum Post content length in characters.
pub const MIN_CONTENT_CHARS: usize = 250;
/// Maximum Post summary length in characters.
pub const MAX_SUMMARY_CHARS: usize = 250;

/// Phrases a Post title must contain at least one of (case-sensitive).
pub const CLICKBAIT_PHRASES: &[&str] = &["You Won't Believe", "Secret", "Top", "Guess", "Reasons"];

static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone number regex"));

/// Rule violation raised when a field value is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty or whitespace-only.
    EmptyAuthorName,
    /// Another Author already uses this name.
    DuplicateAuthorName(String),
    /// Phone number is not exactly ten ASCII digits.
    ///
    /// Other Unicode decimal digits (e.g. full-width `５`) are rejected on
    /// purpose, even though a generic "is digit" check would accept them.
    InvalidPhoneNumber,
    /// Post title is empty or whitespace-only.
    EmptyPostTitle,
    /// Post title contains none of [`CLICKBAIT_PHRASES`].
    MissingClickbaitPhrase,
    /// Post content is shorter than [`MIN_CONTENT_CHARS`].
    ContentTooShort { chars: usize },
    /// Post summary is longer than [`MAX_SUMMARY_CHARS`].
    SummaryTooLong { chars: usize },
    /// Category is not exactly `Fiction` or `Non-Fiction`.
    InvalidCategory(String),
}

impl ValidationError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyAuthorName | Self::DuplicateAuthorName(_) => "name",
            Self::InvalidPhoneNumber => "phone_number",
            Self::EmptyPostTitle | Self::MissingClickbaitPhrase => "title",
            Self::ContentTooShort { .. } => "content",
            Self::SummaryTooLong { .. } => "summary",
            Self::InvalidCategory(_) => "category",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "Author name cannot be empty."),
            Self::DuplicateAuthorName(name) => write!(f, "Author name '{name}' must be unique."),
            Self::InvalidPhoneNumber => write!(
                f,
                "Phone number must be exactly {PHONE_NUMBER_DIGITS} digits."
            ),
            Self::EmptyPostTitle => write!(f, "Post title cannot be empty."),
            Self::MissingClickbaitPhrase => {
                write!(f, "Post title must contain clickbait phrases.")
            }
            Self::ContentTooShort { .. } => write!(
                f,
                "Post content must be at least {MIN_CONTENT_CHARS} characters long."
            ),
            Self::SummaryTooLong { .. } => write!(
                f,
                "Post summary cannot exceed {MAX_SUMMARY_CHARS} characters."
            ),
            Self::InvalidCategory(value) => write!(
                f,
                "Category '{value}' is not valid. Must be 'Fiction' or 'Non-Fiction'."
            ),
        }
    }
}

impl Error for ValidationError {}

/// Checks the storage-independent part of the Author name rule.
///
/// Uniqueness needs a live lookup and is enforced by the repository.
pub fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

/// Accepts exactly ten ASCII digits; non-ASCII decimal digits are rejected.
pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if !PHONE_NUMBER_RE.is_match(phone_number) {
        return Err(ValidationError::InvalidPhoneNumber);
    }
    Ok(())
}

pub fn validate_post_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyPostTitle);
    }
    if !CLICKBAIT_PHRASES
        .iter()
        .any(|phrase| title.contains(phrase))
    {
        return Err(ValidationError::MissingClickbaitPhrase);
    }
    Ok(())
}

pub fn validate_post_content(content: &str) -> Result<(), ValidationError> {
    let chars = content.chars().count();
    if chars < MIN_CONTENT_CHARS {
        return Err(ValidationError::ContentTooShort { chars });
    }
    Ok(())
}

/// An absent or empty summary is always accepted.
pub fn validate_post_summary(summary: Option<&str>) -> Result<(), ValidationError> {
    let Some(summary) = summary else {
        return Ok(());
    };
    let chars = summary.chars().count();
    if chars > MAX_SUMMARY_CHARS {
        return Err(ValidationError::SummaryTooLong { chars });
    }
    Ok(())
}
