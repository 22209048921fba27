//! Output module for console output.
//!
//! Provides:
//! - Colored console output
//! - Workspace layout reporting

pub mod console;

pub use console::{print_error, print_info, print_success, print_warning, print_workspace_summary};
