//! Domain entities: core data structures

use std::path::{Path, PathBuf};

use super::error::DomainError;

/// The project the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: String,
}

impl ProjectRequest {
    /// Create a request from the raw positional argument.
    ///
    /// Only emptiness is checked: the name is used verbatim as a directory name.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Destination directory for this project below `cwd`.
    pub fn target_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.name)
    }
}

/// One collected configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub key: String,
    pub value: String,
}

/// Answers in the order they were collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigAnswers {
    entries: Vec<Answer>,
}

impl ConfigAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. A repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|a| a.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Answer { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigAnswers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (k, v) in iter {
            answers.insert(k, v);
        }
        answers
    }
}

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
///
/// Unknown variables leave the input untouched.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_name_when_creating_request_then_fails() {
        assert_eq!(
            ProjectRequest::new(""),
            Err(DomainError::EmptyProjectName)
        );
    }

    #[test]
    fn given_name_when_target_dir_then_joins_cwd() {
        let request = ProjectRequest::new("myapp").unwrap();
        assert_eq!(
            request.target_dir(Path::new("/work")),
            PathBuf::from("/work/myapp")
        );
    }

    #[test]
    fn given_repeated_key_when_inserting_then_keeps_first_position() {
        let mut answers = ConfigAnswers::new();
        answers.insert("A", "1");
        answers.insert("B", "2");
        answers.insert("A", "3");

        let keys: Vec<_> = answers.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(answers.get("A"), Some("3"));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn given_unknown_variable_when_expanding_then_returns_input() {
        let input = "$CREATE_ROLEAUTH_SURELY_UNSET_VAR/template";
        assert_eq!(expand_env_vars(input), input);
    }
}
