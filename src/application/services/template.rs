//! Template materialization service
//!
//! Writes the starter tree into a fresh project directory, either from the
//! copy compiled into the binary or from a template directory on disk.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::infrastructure::assets::{bundled_template_files, BundledFile};
use crate::infrastructure::traits::FileSystem;

/// Where the template tree comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// The tree embedded at build time
    Bundled,
    /// A template directory on disk
    Directory(PathBuf),
}

/// Result of a successful template copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedTemplate {
    /// Root of the new project
    pub target_dir: PathBuf,
    /// Number of files copied
    pub files: usize,
}

/// Service for copying the template tree.
pub struct TemplateService {
    fs: Arc<dyn FileSystem>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Copy every file and directory of `source` into `target_dir`.
    ///
    /// `target_dir` must not exist yet: an existing destination is rejected
    /// before anything is written, so a previous project is never merged into
    /// or overwritten.
    #[instrument(skip(self))]
    pub fn materialize(
        &self,
        source: &TemplateSource,
        target_dir: &Path,
    ) -> ApplicationResult<MaterializedTemplate> {
        if let TemplateSource::Directory(dir) = source {
            if !self.fs.is_dir(dir) {
                return Err(ApplicationError::TemplateCopy {
                    context: format!("template directory not found: {}", dir.display()),
                    source: Box::new(io::Error::new(
                        io::ErrorKind::NotFound,
                        "template directory does not exist",
                    )),
                });
            }
        }

        if self.fs.exists(target_dir) {
            return Err(ApplicationError::TemplateCopy {
                context: format!("destination already exists: {}", target_dir.display()),
                source: Box::new(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "refusing to copy into an existing directory",
                )),
            });
        }

        self.fs
            .create_dir_all(target_dir)
            .with_copy_context("create project directory", target_dir)?;

        let files = match source {
            TemplateSource::Bundled => self.write_bundled(&bundled_template_files(), target_dir)?,
            TemplateSource::Directory(dir) => self.copy_directory(dir, target_dir)?,
        };

        Ok(MaterializedTemplate {
            target_dir: target_dir.to_path_buf(),
            files,
        })
    }

    /// Write embedded files below `target_dir`, creating directories as needed.
    pub fn write_bundled(&self, files: &[BundledFile], target_dir: &Path) -> ApplicationResult<usize> {
        for file in files {
            let path = file
                .path
                .split('/')
                .fold(target_dir.to_path_buf(), |acc, part| acc.join(part));
            if let Some(parent) = path.parent() {
                self.fs
                    .create_dir_all(parent)
                    .with_copy_context("create directory", parent)?;
            }
            self.fs
                .create_new(&path, &file.data)
                .with_copy_context("write template file", &path)?;
        }
        debug!("materialize: wrote {} bundled files", files.len());
        Ok(files.len())
    }

    fn copy_directory(&self, template_dir: &Path, target_dir: &Path) -> ApplicationResult<usize> {
        let bytes = self
            .fs
            .copy_dir_contents(template_dir, target_dir)
            .with_copy_context("copy template", template_dir)?;

        let files = self
            .fs
            .count_files(target_dir)
            .with_copy_context("scan project directory", target_dir)?;
        debug!("materialize: copied {} files ({} bytes)", files, bytes);
        Ok(files)
    }
}
