use std::io;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use create_roleauth::cli::commands::{execute_command, USAGE_EXAMPLE};
use create_roleauth::cli::{output, Cli, CliError};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = Cli::parse();

    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        print_completions(generator, &mut cmd);
        return;
    }

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        tracing::debug!("failed with {}", e.kind());
        match &e {
            CliError::MissingArgument => {
                output::usage("Please provide a project name.", USAGE_EXAMPLE)
            }
            _ => output::error(&e),
        }
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // RUST_LOG wins over -d when set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(filter.into()));

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use create_roleauth::util::testing;

    #[test]
    fn verify_cli() {
        testing::init_test_setup();
        Cli::command().debug_assert();
    }

    #[test]
    fn given_only_name_when_parsing_then_defaults_apply() {
        let cli = Cli::try_parse_from(["create-roleauth", "myapp"]).unwrap();
        assert_eq!(cli.project_name.as_deref(), Some("myapp"));
        assert_eq!(cli.debug, 0);
        assert!(cli.template.is_none());
    }

    #[test]
    fn given_no_name_when_parsing_then_still_parses() {
        let cli = Cli::try_parse_from(["create-roleauth"]).unwrap();
        assert!(cli.project_name.is_none());
    }
}
