//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("template copy failed: {context}: {source}")]
    TemplateCopy {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("aborted while answering {field}: {reason}")]
    UserAborted { field: String, reason: String },

    #[error("cannot write env file {}: {source}", path.display())]
    EnvWrite {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("dependency install failed in {}: {message}", dir.display())]
    Install {
        dir: PathBuf,
        message: String,
        exit_code: Option<i32>,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
