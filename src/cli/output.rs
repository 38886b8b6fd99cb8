use colored::Colorize;
use std::fmt;

/// Prints an informational message.
pub fn info(message: impl fmt::Display) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Prints a success message.
pub fn success(message: impl fmt::Display) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Prints a warning message.
pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Prints an error message.
pub fn error(message: impl fmt::Display) {
    println!("{} {}", "ERROR:".red().bold(), message);
}

/// Prints a section heading.
pub fn section(title: impl fmt::Display) {
    println!("\n{}", format!("===== {title} =====").bold());
}

pub fn separator() {
    println!("----------------------------------------");
}
