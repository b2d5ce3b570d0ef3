//! Flat `KEY=VALUE` env files for the generated project

use std::path::{Path, PathBuf};

use super::entities::ConfigAnswers;
use super::error::DomainError;
use super::fields::{API_BASE_URL_KEY, FRONTEND_PREFIX};

/// Backend sub-project, relative to the project root.
pub const BACKEND_DIR: &str = "backend";

/// Web client sub-project, relative to the project root.
pub const FRONTEND_DIR: &str = "webclient";

const ENV_FILE_NAME: &str = ".env";

/// An env file to be written below the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    /// Path relative to the project root
    pub relative_path: PathBuf,
    /// Ordered `(key, value)` lines
    pub entries: Vec<(String, String)>,
}

impl EnvFile {
    /// Every answer whose key lacks the frontend marker, in collection order.
    pub fn backend(answers: &ConfigAnswers) -> Self {
        let entries = answers
            .iter()
            .filter(|a| !a.key.starts_with(FRONTEND_PREFIX))
            .map(|a| (a.key.clone(), a.value.clone()))
            .collect();
        Self {
            relative_path: Path::new(BACKEND_DIR).join(ENV_FILE_NAME),
            entries,
        }
    }

    /// The web client only ever receives the API base URL.
    pub fn frontend(answers: &ConfigAnswers) -> Result<Self, DomainError> {
        let value = answers
            .get(API_BASE_URL_KEY)
            .ok_or_else(|| DomainError::MissingAnswer(API_BASE_URL_KEY.to_string()))?;
        Ok(Self {
            relative_path: Path::new(FRONTEND_DIR).join(ENV_FILE_NAME),
            entries: vec![(API_BASE_URL_KEY.to_string(), value.to_string())],
        })
    }

    /// Lines joined by `\n`, without a trailing newline. Values are not quoted.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> ConfigAnswers {
        [
            ("PORT", "5000"),
            ("REACT_APP_API_BASE_URL", "http://localhost:5000"),
            ("JWT_SECRET", "s3cret"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn given_answers_when_backend_then_filters_frontend_keys_in_order() {
        let file = EnvFile::backend(&answers());
        assert_eq!(file.relative_path, Path::new("backend").join(".env"));
        assert_eq!(file.render(), "PORT=5000\nJWT_SECRET=s3cret");
    }

    #[test]
    fn given_answers_when_frontend_then_single_api_line() {
        let file = EnvFile::frontend(&answers()).unwrap();
        assert_eq!(file.relative_path, Path::new("webclient").join(".env"));
        assert_eq!(file.render(), "REACT_APP_API_BASE_URL=http://localhost:5000");
    }

    #[test]
    fn given_other_frontend_key_when_frontend_then_ignored() {
        let mut answers = answers();
        answers.insert("REACT_APP_THEME", "dark");

        let frontend = EnvFile::frontend(&answers).unwrap();
        let backend = EnvFile::backend(&answers);

        assert_eq!(frontend.entries.len(), 1);
        assert!(!backend.render().contains("REACT_APP_THEME"));
    }

    #[test]
    fn given_missing_api_url_when_frontend_then_error() {
        let answers: ConfigAnswers = [("PORT", "5000")].into_iter().collect();
        assert_eq!(
            EnvFile::frontend(&answers),
            Err(DomainError::MissingAnswer(API_BASE_URL_KEY.to_string()))
        );
    }

    #[test]
    fn given_value_with_equals_when_render_then_written_verbatim() {
        let answers: ConfigAnswers = [("MONGO_URI", "mongodb://h/db?a=b")].into_iter().collect();
        assert_eq!(EnvFile::backend(&answers).render(), "MONGO_URI=mongodb://h/db?a=b");
    }
}
