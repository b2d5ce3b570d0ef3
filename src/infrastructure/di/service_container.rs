//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{
    ConfiguratorService, EnvWriterService, InstallerService, TemplateService,
};
use crate::config::Settings;
use crate::infrastructure::traits::{
    CommandRunner, DialoguerPrompter, FileSystem, Prompter, RealCommandRunner, RealFileSystem,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// Interactive prompt abstraction
    pub prompter: Arc<dyn Prompter>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(RealCommandRunner),
            Arc::new(DialoguerPrompter),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            cmd,
            prompter,
        }
    }

    pub fn template_service(&self) -> TemplateService {
        TemplateService::new(self.fs.clone())
    }

    pub fn configurator_service(&self) -> ConfiguratorService {
        ConfiguratorService::new(self.prompter.clone())
    }

    pub fn env_writer_service(&self) -> EnvWriterService {
        EnvWriterService::new(self.fs.clone())
    }

    pub fn installer_service(&self) -> InstallerService {
        InstallerService::new(self.cmd.clone(), self.settings.clone())
    }
}
