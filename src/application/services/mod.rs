//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, CommandRunner, Prompter)
//! but are themselves concrete structs, not traits.

mod configurator;
mod env_writer;
mod installer;
mod template;

pub use configurator::ConfiguratorService;
pub use env_writer::{EnvWriterService, WrittenEnvFiles};
pub use installer::InstallerService;
pub use template::{MaterializedTemplate, TemplateService, TemplateSource};
