//! Progress display module
//!
//! Colored status lines, a spinner for the curation pass and the statistics
//! table.

use crate::stats::{CurationStats, Rejection};
use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════╗
║                     DICTIONARY CURATOR                       ║
║          Normalize · Filter · Deduplicate · Tier             ║
╚══════════════════════════════════════════════════════════════╝
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

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
    {
        pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
    }

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Print the rejection table and tier histogram
pub fn print_stats(stats: &CurationStats, source_bytes: u64, elapsed: Duration) {
    println!();
    println!("{}", "═".repeat(60).green());
    println!("{}", "                    CURATION COMPLETE".green().bold());
    println!("{}", "═".repeat(60).green());
    println!();

    println!("  {} {}", "Source size:    ".green(), ByteSize(source_bytes));
    println!("  {} {}", "Examined:       ".green(), format_number(stats.examined()));
    println!();

    for reason in Rejection::ALL {
        let count = stats.rejected(reason);
        if count > 0 {
            println!(
                "  {} {}",
                format!("{:<16}", format!("{}:", reason)).yellow(),
                format_number(count)
            );
        }
    }
    println!(
        "  {} {}",
        "Rejected:       ".yellow().bold(),
        format_number(stats.rejected_total())
    );
    println!();

    for (i, count) in stats.tier_counts().iter().enumerate() {
        println!(
            "  {} {}",
            format!("{:<16}", format!("Tier {}:", i + 1)).green(),
            format_number(*count)
        );
    }
    println!(
        "  {} {}",
        "Curated:        ".green().bold(),
        format_number(stats.accepted()).green().bold()
    );

    println!();
    println!("  {} {}", "Duration:       ".green(), format_duration(elapsed));
    println!();
    println!("{}", "═".repeat(60).green());
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(400)), "0.4s");
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
    }
}
