use console::style;

use crate::types::{FileKind, GeneratedFile};

/// Styled terminal output for text-mode commands
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Aligned `label: value` line
    pub fn field(&self, label: &str, value: &str) {
        println!("  {:<12} {}", style(format!("{}:", label)).dim(), value);
    }

    /// Confidence rendered as a percentage, colored by strength
    pub fn confidence(&self, label: &str, value: f64) {
        let percent = format!("{:.0}%", value * 100.0);
        let styled = if value >= 0.7 {
            style(percent).green()
        } else if value >= 0.4 {
            style(percent).yellow()
        } else {
            style(percent).red()
        };
        println!("  {:<12} {}", style(format!("{}:", label)).dim(), styled);
    }

    pub fn file(&self, file: &GeneratedFile) {
        let tag = match file.kind {
            FileKind::Component => style("component").cyan(),
            FileKind::Config => style("config").magenta(),
            FileKind::Test => style("test").yellow(),
        };
        println!(
            "  {:<10} {} ({} bytes)",
            tag,
            file.path,
            file.content.len()
        );
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
