//! Tests for EnvWriterService

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use create_roleauth::application::services::EnvWriterService;
use create_roleauth::application::ApplicationError;
use create_roleauth::domain::{ConfigAnswers, FIELDS};
use create_roleauth::infrastructure::traits::RealFileSystem;

/// Project skeleton with both sub-project directories.
fn project_dir(temp: &TempDir) -> std::path::PathBuf {
    let dir = temp.path().join("myapp");
    fs::create_dir_all(dir.join("backend")).unwrap();
    fs::create_dir_all(dir.join("webclient")).unwrap();
    dir
}

/// One distinct value per field: `<key lowercase>-value`.
fn distinct_answers() -> ConfigAnswers {
    FIELDS
        .iter()
        .map(|f| (f.key, format!("{}-value", f.key.to_lowercase())))
        .collect()
}

fn service() -> EnvWriterService {
    EnvWriterService::new(Arc::new(RealFileSystem))
}

#[test]
fn given_ten_answers_when_write_then_backend_has_nine_keys_in_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let dir = project_dir(&temp);

    // Act
    let written = service().write(&dir, &distinct_answers()).unwrap();

    // Assert
    assert_eq!(written.backend, dir.join("backend").join(".env"));
    let content = fs::read_to_string(&written.backend).unwrap();
    let keys: Vec<_> = content
        .lines()
        .map(|l| l.split_once('=').unwrap().0)
        .collect();
    assert_eq!(
        keys,
        vec![
            "PORT",
            "MONGO_URI",
            "JWT_SECRET",
            "EMAIL_HOST",
            "EMAIL_USER",
            "EMAIL_PASS",
            "GOOGLE_CLIENT_ID",
            "GOOGLE_CLIENT_SECRET",
            "GOOGLE_CALLBACK_URL",
        ]
    );
    assert!(content.starts_with("PORT=port-value\n"));
    assert!(!content.contains("REACT_APP"));
}

#[test]
fn given_answers_when_write_then_frontend_has_single_api_line() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let dir = project_dir(&temp);

    // Act
    let written = service().write(&dir, &distinct_answers()).unwrap();

    // Assert
    assert_eq!(written.frontend, dir.join("webclient").join(".env"));
    assert_eq!(
        fs::read_to_string(&written.frontend).unwrap(),
        "REACT_APP_API_BASE_URL=react_app_api_base_url-value"
    );
}

#[test]
fn given_existing_env_files_when_write_then_overwrites_them() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let dir = project_dir(&temp);
    fs::write(dir.join("backend/.env"), "OLD=1\nSTALE=2\n").unwrap();
    fs::write(dir.join("webclient/.env"), "OLD=1\n").unwrap();

    // Act
    service().write(&dir, &distinct_answers()).unwrap();

    // Assert
    let backend = fs::read_to_string(dir.join("backend/.env")).unwrap();
    assert!(!backend.contains("OLD"));
    assert_eq!(backend.lines().count(), 9);
}

#[test]
fn given_missing_backend_dir_when_write_then_env_write_failure() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("partial");
    fs::create_dir_all(dir.join("webclient")).unwrap();

    // Act
    let result = service().write(&dir, &distinct_answers());

    // Assert
    match result {
        Err(ApplicationError::EnvWrite { path, .. }) => {
            assert_eq!(path, dir.join("backend").join(".env"));
        }
        other => panic!("expected EnvWrite, got {other:?}"),
    }
}

#[test]
fn given_no_api_url_answer_when_write_then_nothing_is_written() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let dir = project_dir(&temp);
    let answers: ConfigAnswers = [("PORT", "5000")].into_iter().collect();

    // Act
    let result = service().write(&dir, &answers);

    // Assert
    assert!(matches!(result, Err(ApplicationError::EnvWrite { .. })));
    assert!(!Path::new(&dir.join("backend/.env")).exists());
}
