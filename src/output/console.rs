//! Console output utilities.

use console::style;

use crate::workspace::Workspace;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the resolved workspace layout.
pub fn print_workspace_summary(workspace: &Workspace) {
    println!();
    println!("{}", style("Workspace:").bold());
    println!("  Base: {}", workspace.base.display());
    println!("  Input: {}", workspace.input_dir.display());
    println!("  Output: {}", workspace.output_dir.display());
    println!("  Old output: {}", workspace.old_output_dir.display());
    println!("  Ensemble: {}", workspace.ensemble_dir.display());
    println!("  Video temp: {}", workspace.video_temp.display());
    println!();
}
