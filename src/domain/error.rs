//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("project name is missing")]
    EmptyProjectName,

    #[error("no answer collected for {0}")]
    MissingAnswer(String),
}
