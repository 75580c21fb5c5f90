//! Pure formatting functions for UI output.
//!
//! The `format_*` functions build plain strings and are what the tests look
//! at. The `display_*` functions add color through `console` and print.

use console::style;

use crate::cli::BumpOutcome;

/// Fixed tag in front of every informational line.
pub const TOOL_TAG: &str = "[bump-version]";

/// Prefix a message with the tool tag.
pub fn format_info(message: &str) -> String {
    tagged(TOOL_TAG, message)
}

fn tagged(tag: impl std::fmt::Display, message: &str) -> String {
    format!("{} {}", tag, message)
}

/// Usage line printed when no version was supplied.
pub fn format_usage(version_env: &str) -> String {
    format!(
        "Usage: bump-version <version>\n       (or set the {} environment variable)",
        version_env
    )
}

/// Main line describing what happened to the build file.
pub fn format_update_line(outcome: &BumpOutcome) -> String {
    let verb = if outcome.written {
        "Updated"
    } else {
        "Would update"
    };
    format!(
        "{} {} fallback version {} -> {}",
        verb,
        outcome.build_file.display(),
        outcome.previous,
        outcome.version
    )
}

/// Tagged line as printed; plain `format_info` output once colors are off.
fn styled_info(message: &str) -> String {
    tagged(style(TOOL_TAG).cyan(), message)
}

/// Print a tagged informational line.
pub fn display_info(message: &str) {
    println!("{}", styled_info(message));
}

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", style(message).red().for_stderr());
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a non-fatal warning.
pub fn display_warning(message: &str) {
    println!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Print the usage message to stderr.
pub fn display_usage(version_env: &str) {
    eprintln!("{}", format_usage(version_env));
}

/// Report a successful bump.
///
/// Always ends with the two tagged lines (update, then "Done."); the status
/// and warning lines in between only show up when they apply.
pub fn display_outcome(outcome: &BumpOutcome) {
    if outcome.is_unchanged() {
        display_status(&format!(
            "Fallback version already at {}",
            outcome.version
        ));
    } else if outcome.is_downgrade() {
        display_warning(&format!(
            "Fallback version goes down: {} -> {}",
            outcome.previous, outcome.version
        ));
    }

    display_info(&format_update_line(outcome));
    display_info("Done.");
}
