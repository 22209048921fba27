//! Workspace module.
//!
//! Provides:
//! - Base path resolution and the fixed directory layout
//! - Directory maintenance and output archiving

pub mod maintenance;
pub mod paths;

pub use maintenance::{clear_directory, clear_old_output, clear_temp_folder, move_old_files};
pub use paths::{Workspace, BASE_PATH_ENV};
