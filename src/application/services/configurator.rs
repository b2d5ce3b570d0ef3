//! Interactive configuration service
//!
//! Walks the fixed prompt schema once and records every answer.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{ConfigAnswers, DisplayMode, FieldSpec, FIELDS};
use crate::infrastructure::traits::Prompter;

/// Service collecting `.env` values from the user.
pub struct ConfiguratorService {
    prompter: Arc<dyn Prompter>,
}

impl ConfiguratorService {
    /// Create a new configurator service.
    pub fn new(prompter: Arc<dyn Prompter>) -> Self {
        Self { prompter }
    }

    /// Ask every field of the built-in schema.
    pub fn collect(&self) -> ApplicationResult<ConfigAnswers> {
        self.collect_fields(FIELDS)
    }

    /// Ask `fields` in order. The first aborted prompt ends the session and
    /// discards everything collected so far.
    #[instrument(skip_all, fields(count = fields.len()))]
    pub fn collect_fields(&self, fields: &[FieldSpec]) -> ApplicationResult<ConfigAnswers> {
        let mut answers = ConfigAnswers::new();

        for field in fields {
            let input = self
                .prompter
                .ask(field)
                .map_err(|reason| ApplicationError::UserAborted {
                    field: field.key.to_string(),
                    reason,
                })?;
            let value = field.resolve(&input);

            match field.mode {
                DisplayMode::Masked => debug!("collect: {}=<masked>", field.key),
                DisplayMode::Text => debug!("collect: {}={}", field.key, value),
            }
            answers.insert(field.key, value);
        }

        Ok(answers)
    }
}
