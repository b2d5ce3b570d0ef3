//! Command dispatch: the scaffolding pipeline

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{ProjectRequest, BACKEND_DIR, FRONTEND_DIR};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Example invocation shown when the project name is missing.
pub const USAGE_EXAMPLE: &str = "create-roleauth my-app";

/// Sub-projects whose dependencies are installed, in order.
const INSTALL_ORDER: [(&str, &str); 2] = [("backend", BACKEND_DIR), ("frontend", FRONTEND_DIR)];

/// Resolve the project name, load settings and run the pipeline in the current directory.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let request = resolve_request(cli.project_name.as_deref())?;

    let settings = Settings::load()?
        .with_overrides(cli.template.as_deref(), cli.package_manager.as_deref());
    debug!("effective settings:\n{}", settings.to_toml()?);

    let cwd = env::current_dir().map_err(|e| InfraError::io("determine current directory", e))?;
    let container = ServiceContainer::new(settings);

    scaffold(&container, &request, &cwd)?;
    Ok(())
}

/// Turn the optional positional argument into a request.
pub fn resolve_request(name: Option<&str>) -> CliResult<ProjectRequest> {
    ProjectRequest::new(name.unwrap_or_default()).map_err(|_| CliError::MissingArgument)
}

/// Copy the template, collect answers, write env files, install, report.
///
/// Every step runs only after the previous one succeeded. Nothing is rolled
/// back on failure. Returns the project directory.
#[instrument(skip(container), fields(project = request.name()))]
pub fn scaffold(
    container: &ServiceContainer,
    request: &ProjectRequest,
    cwd: &Path,
) -> CliResult<PathBuf> {
    let target_dir = request.target_dir(cwd);
    output::info(&format!("📁 Creating project at: {}", target_dir.display()));

    let template = container
        .template_service()
        .materialize(&container.settings.template_source(), &target_dir)?;
    output::success(&format!("Template copied ({} files).", template.files));
    let project_dir = template.target_dir;

    output::step("🛠", "Let's configure your .env backend file\n");
    let answers = container.configurator_service().collect()?;

    let written = container.env_writer_service().write(&project_dir, &answers)?;
    for path in [&written.backend, &written.frontend] {
        let shown = path.strip_prefix(&project_dir).unwrap_or(path.as_path());
        output::success(&format!(".env file created at: {}", shown.display()));
    }

    let installer = container.installer_service();
    for (label, dir) in INSTALL_ORDER {
        output::step("📦", &format!("Installing {label} dependencies..."));
        installer.install(&project_dir.join(dir))?;
    }

    report_completion(request.name(), &container.settings.package_manager);
    Ok(project_dir)
}

/// Print next steps for the freshly created project.
fn report_completion(project_name: &str, package_manager: &str) {
    let runner = Path::new(package_manager)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(package_manager);

    output::step("✅", "All set! Start your app with:");
    output::command(&format!("cd {project_name}"));
    output::command(&format!("{runner} run dev"));
    output::info("\n🧠 Remember to update any production credentials before going live.");
}
