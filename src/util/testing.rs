//! Shared helpers for unit and integration tests

use std::path::Path;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

/// Install a global tracing subscriber once per test binary.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Create a minimal template tree with a backend and a web client below `root`.
///
/// Returns the list of relative file paths written.
pub fn write_sample_template(root: &Path) -> std::io::Result<Vec<&'static str>> {
    let files: [(&'static str, &str); 5] = [
        ("package.json", "{ \"name\": \"root\" }\n"),
        ("backend/package.json", "{ \"name\": \"backend\" }\n"),
        ("backend/src/server.js", "console.log('up');\n"),
        ("webclient/package.json", "{ \"name\": \"webclient\" }\n"),
        ("webclient/public/index.html", "<div id=\"root\"></div>\n"),
    ];
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
    }
    Ok(files.iter().map(|(rel, _)| *rel).collect())
}
