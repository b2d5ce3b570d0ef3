//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red "❌ Error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{} {}", "❌ Error:".red().bold(), msg);
}

/// Print usage problem (red cross) with an example invocation on stdout
pub fn usage(msg: &(impl std::fmt::Display + ?Sized), example: &str) {
    println!("{} {}", "❌".red(), msg);
    println!("👉 Example: {}", example.cyan());
}

/// Print success status (green check)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✅".green(), msg);
}

/// Print a pipeline step with its icon, preceded by a blank line
pub fn step(icon: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("\n{} {}", icon, msg.to_string().bold());
}

/// Print indented command (no color)
pub fn command(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("   {}", msg);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}
