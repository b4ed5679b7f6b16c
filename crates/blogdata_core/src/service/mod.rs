//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Emit metadata-only outcome events for every write use-case.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - Log lines carry ids and field names only, never user text.

use crate::repo::{RepoError, RepoResult};
use log::{log, Level};

pub mod author_service;
pub mod post_service;

/// Logs the outcome of a write use-case and hands the result back.
pub(crate) fn log_outcome<T>(
    event: &'static str,
    id: Option<i64>,
    result: RepoResult<T>,
) -> RepoResult<T> {
    let (level, line) = outcome_line(event, id, &result);
    log!(level, "{line}");
    result
}

// Errors are reduced to their kind; `RepoError` text may quote stored values.
fn outcome_line<T>(event: &str, id: Option<i64>, result: &RepoResult<T>) -> (Level, String) {
    let id = id.map_or_else(|| "-".to_string(), |id| id.to_string());
    match result {
        Ok(_) => (
            Level::Info,
            format!("event={event} module=service status=ok id={id}"),
        ),
        Err(RepoError::Validation(err)) => (
            Level::Warn,
            format!(
                "event={event} module=service status=rejected id={id} field={}",
                err.field()
            ),
        ),
        Err(RepoError::NotFound { entity, .. }) => (
            Level::Warn,
            format!("event={event} module=service status=not_found entity={entity} id={id}"),
        ),
        Err(err) => (
            Level::Error,
            format!(
                "event={event} module=service status=error id={id} kind={}",
                err.kind()
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::outcome_line;
    use crate::model::validation::ValidationError;
    use crate::repo::{RepoError, RepoResult};
    use log::Level;

    #[test]
    fn rejection_logs_field_without_value() {
        let result: RepoResult<()> = Err(ValidationError::DuplicateAuthorName(
            "Ada Lovelace".to_string(),
        )
        .into());
        let (level, line) = outcome_line("author_create", None, &result);
        assert_eq!(level, Level::Warn);
        assert_eq!(
            line,
            "event=author_create module=service status=rejected id=- field=name"
        );
    }

    #[test]
    fn invalid_data_logs_kind_only() {
        let result: RepoResult<()> = Err(RepoError::InvalidData(format!(
            "posts row 4: {}",
            ValidationError::InvalidCategory("Drama".to_string())
        )));
        let (level, line) = outcome_line("post_update", Some(4), &result);
        assert_eq!(level, Level::Error);
        assert_eq!(
            line,
            "event=post_update module=service status=error id=4 kind=invalid_data"
        );
        assert!(!line.contains("Drama"));
    }

    #[test]
    fn not_found_and_success_lines() {
        let missing: RepoResult<()> = Err(RepoError::NotFound {
            entity: "post",
            id: 9,
        });
        let (level, line) = outcome_line("post_delete", Some(9), &missing);
        assert_eq!(level, Level::Warn);
        assert!(line.ends_with("status=not_found entity=post id=9"));

        let (level, line) = outcome_line("post_delete", Some(9), &Ok(()));
        assert_eq!(level, Level::Info);
        assert!(line.ends_with("status=ok id=9"));
    }
}
