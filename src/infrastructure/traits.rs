//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;

use crate::domain::{DisplayMode, FieldSpec};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Write string content to file, replacing any existing content.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Write raw bytes to a new file; fails if the file already exists.
    fn create_new(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy everything below `from` into the existing directory `to`.
    ///
    /// Fails instead of overwriting when a target file already exists.
    fn copy_dir_contents(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Count regular files below `dir`, recursively.
    fn count_files(&self, dir: &Path) -> io::Result<usize>;
}

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code; `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command in `cwd` with stdin, stdout and stderr inherited.
    /// Blocks until the child exits.
    fn run_inherited(&self, cmd: &str, args: &[&str], cwd: &Path) -> io::Result<RunStatus>;
}

/// Interactive line prompt abstraction.
pub trait Prompter: Send + Sync {
    /// Ask a single question and return what the user entered.
    ///
    /// An empty string means the user accepted the default (or left a
    /// field without default blank). `Err` means the session was aborted.
    fn ask(&self, field: &FieldSpec) -> Result<String, String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn create_new(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        use std::io::Write;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn copy_dir_contents(&self, from: &Path, to: &Path) -> io::Result<u64> {
        use fs_extra::dir::{copy, CopyOptions};

        let mut options = CopyOptions::new();
        options.content_only = true;
        copy(from, to, &options).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }

    fn count_files(&self, dir: &Path) -> io::Result<usize> {
        use walkdir::WalkDir;

        let mut count = 0;
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_file() {
                count += 1;
            }
        }
        Ok(count)
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run_inherited(&self, cmd: &str, args: &[&str], cwd: &Path) -> io::Result<RunStatus> {
        use std::process::{Command, Stdio};

        let status = Command::new(cmd)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(RunStatus {
            code: status.code(),
        })
    }
}

/// Real prompter using dialoguer on the controlling terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&self, field: &FieldSpec) -> Result<String, String> {
        use dialoguer::{Input, Password};

        match field.mode {
            DisplayMode::Masked => Password::new()
                .with_prompt(field.message)
                .allow_empty_password(true)
                .interact()
                .map_err(|e| format!("prompt error: {e}")),
            DisplayMode::Text => {
                let mut input = Input::<String>::new()
                    .with_prompt(field.message)
                    .allow_empty(true);
                if let Some(default) = field.default {
                    input = input.default(default.to_string());
                }
                input
                    .interact_text()
                    .map_err(|e| format!("prompt error: {e}"))
            }
        }
    }
}
