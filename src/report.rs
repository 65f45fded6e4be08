//! Terminal output helpers
//!
//! Styled stdout messaging for the CLI. Dirty word diagnostics never come
//! through here - the scanner writes those to stderr itself - so everything in
//! this module is safe to silence with `--quiet` without losing findings.

use colored::*;

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════╗
║   ██████╗ ██╗    ██╗███████╗ ██████╗ █████╗ ███╗   ██╗
║   ██╔══██╗██║    ██║██╔════╝██╔════╝██╔══██╗████╗  ██║
║   ██║  ██║██║ █╗ ██║███████╗██║     ███████║██╔██╗ ██║
║   ██║  ██║██║███╗██║╚════██║██║     ██╔══██║██║╚██╗██║
║   ██████╔╝╚███╔███╔╝███████║╚██████╗██║  ██║██║ ╚████║
║   ╚═════╝  ╚══╝╚══╝ ╚══════╝ ╚═════╝╚═╝  ╚═╝╚═╝  ╚═══╝
║                 dirty word scanner v1.1.0
╚══════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}
