//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod env_file;
pub mod error;
pub mod fields;

pub use entities::*;
pub use env_file::{EnvFile, BACKEND_DIR, FRONTEND_DIR};
pub use error::DomainError;
pub use fields::{DisplayMode, FieldSpec, API_BASE_URL_KEY, FIELDS, FRONTEND_PREFIX};
