//! Dependency installation service
//!
//! Runs the package manager's install command inside a sub-project.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::infrastructure::traits::CommandRunner;

/// Service for installing sub-project dependencies.
pub struct InstallerService {
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl InstallerService {
    /// Create a new installer service.
    pub fn new(cmd: Arc<dyn CommandRunner>, settings: Arc<Settings>) -> Self {
        Self { cmd, settings }
    }

    /// The command line that `install` runs, for display.
    pub fn command_line(&self) -> String {
        std::iter::once(self.settings.package_manager.as_str())
            .chain(self.settings.install_args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Install dependencies in `dir`, streaming installer output to the terminal.
    ///
    /// Blocks until the installer exits. Spawn failures and non-zero exits
    /// are both reported as install failures.
    #[instrument(skip(self))]
    pub fn install(&self, dir: &Path) -> ApplicationResult<()> {
        let program = self.settings.package_manager.as_str();
        let args: Vec<&str> = self.settings.install_args.iter().map(String::as_str).collect();
        debug!("install: {} {:?} in {}", program, args, dir.display());

        let status = self
            .cmd
            .run_inherited(program, &args, dir)
            .map_err(|e| ApplicationError::Install {
                dir: dir.to_path_buf(),
                message: format!("cannot run {}: {}", self.command_line(), e),
                exit_code: None,
            })?;

        if !status.success() {
            return Err(ApplicationError::Install {
                dir: dir.to_path_buf(),
                message: match status.code {
                    Some(code) => format!("{} exited with status {}", self.command_line(), code),
                    None => format!("{} was terminated by a signal", self.command_line()),
                },
                exit_code: status.code,
            });
        }

        info!("install: done in {}", dir.display());
        Ok(())
    }
}
