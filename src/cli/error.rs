//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("no project name given")]
    MissingArgument,
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Every failure exits with 1; there is no finer-grained status.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingArgument | CliError::Infra(_) => crate::exitcode::FAILURE,
        }
    }

    /// Short name of the failure class, used in debug logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::MissingArgument => "MissingArgument",
            CliError::Infra(InfraError::Io { .. }) => "Io",
            CliError::Infra(InfraError::Application(e)) => match e {
                ApplicationError::TemplateCopy { .. } => "TemplateCopyFailure",
                ApplicationError::UserAborted { .. } => "UserAborted",
                ApplicationError::EnvWrite { .. } => "EnvWriteFailure",
                ApplicationError::Install { .. } => "InstallFailure",
                ApplicationError::Domain(_) => "Domain",
                ApplicationError::Config { .. } => "Config",
            },
        }
    }
}
