//! User interface module - everything that reaches stdout or stderr.
//!
//! bump-version runs unattended in build pipelines, so there are no prompts;
//! this module only re-exports the formatter.

pub mod formatter;

pub use formatter::{
    display_error, display_info, display_outcome, display_status, display_usage,
    display_warning, format_info, format_update_line, format_usage, TOOL_TAG,
};
