//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Attribute a failed template copy to `path`.
    ///
    /// # Example
    /// ```ignore
    /// fs.copy_dir_contents(&src, &dst)
    ///     .with_copy_context("copy template", &src)?;
    /// ```
    fn with_copy_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Attribute a failed env file write to `path`.
    fn with_env_write_context(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_copy_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::TemplateCopy {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }

    fn with_env_write_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::EnvWrite {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }
}
