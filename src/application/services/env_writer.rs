//! Env file writer service

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{ConfigAnswers, EnvFile};
use crate::infrastructure::traits::FileSystem;

/// Absolute paths of the files written for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenEnvFiles {
    pub backend: PathBuf,
    pub frontend: PathBuf,
}

/// Service writing the backend and web client `.env` files.
pub struct EnvWriterService {
    fs: Arc<dyn FileSystem>,
}

impl EnvWriterService {
    /// Create a new env writer service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Partition `answers` and write both env files below `project_dir`.
    ///
    /// Existing files are replaced without asking. The sub-project
    /// directories must already exist (they come from the template).
    #[instrument(skip(self, answers))]
    pub fn write(
        &self,
        project_dir: &Path,
        answers: &ConfigAnswers,
    ) -> ApplicationResult<WrittenEnvFiles> {
        let backend = EnvFile::backend(answers);
        let frontend = EnvFile::frontend(answers).map_err(|e| ApplicationError::EnvWrite {
            path: project_dir.join(crate::domain::FRONTEND_DIR).join(".env"),
            source: Box::new(e),
        })?;

        let backend = self.write_one(project_dir, &backend)?;
        let frontend = self.write_one(project_dir, &frontend)?;

        Ok(WrittenEnvFiles { backend, frontend })
    }

    fn write_one(&self, project_dir: &Path, file: &EnvFile) -> ApplicationResult<PathBuf> {
        let path = project_dir.join(&file.relative_path);
        debug!("write: {} ({} entries)", path.display(), file.entries.len());

        self.fs
            .write(&path, &file.render())
            .with_env_write_context(&path)?;

        Ok(path)
    }
}
