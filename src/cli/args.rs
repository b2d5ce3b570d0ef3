//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Scaffold a MERN role-based auth starter project
#[derive(Parser, Debug)]
#[command(name = "create-roleauth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Template directory (overrides config and CREATE_ROLEAUTH_TEMPLATE_DIR)
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub template: Option<PathBuf>,

    /// Package manager used to install dependencies (default: npm)
    #[arg(long)]
    pub package_manager: Option<String>,

    /// Print shell completions and exit
    #[arg(long = "completions", value_enum, value_name = "SHELL")]
    pub generator: Option<clap_complete::Shell>,
}
