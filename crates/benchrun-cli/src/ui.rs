//! Styled messages on standard error.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}

/// Print the names of the available benchmarks after a failed selection.
pub fn print_available(names: &[&str]) {
    eprintln!("Available benchmarks:");
    for name in names {
        if is_color_disabled() {
            eprintln!("  {name}");
        } else {
            eprintln!("  {}", style(name).cyan());
        }
    }
}
