//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use serde_json::Value;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Render a JSON scalar without surrounding quotes; nested values stay
/// JSON-encoded
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Color a stress level by severity
pub fn color_stress_level(level: &str) -> String {
    match level.to_lowercase().as_str() {
        "low" | "minimal" => level.green().to_string(),
        "moderate" | "medium" => level.yellow().to_string(),
        "high" => level.red().to_string(),
        "severe" | "critical" => level.red().bold().to_string(),
        _ => level.to_string(),
    }
}
