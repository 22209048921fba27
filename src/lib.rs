//! MSS Toolkit - workspace utilities for a music source-separation pipeline
//!
//! This library manages the on-disk working state of a separation pipeline.
//!
//! # Features
//!
//! - Fixed workspace layout resolved from `MSS_BASE_PATH` or the home directory
//! - Directory clearing and output archiving
//! - Filename shortening and sanitization
//! - Upload ingestion with input-name normalization
//! - WAV conversion through ffmpeg
//! - Inference configuration patching with tuple-tag YAML round-tripping
//!
//! # Example
//!
//! ```no_run
//! use mss_toolkit::{save_uploaded_file, UploadSource, Workspace};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let workspace = Workspace::resolve(None)?;
//!     workspace.ensure_layout()?;
//!
//!     let saved = save_uploaded_file(
//!         &workspace,
//!         UploadSource::path("/uploads/song_20231001_120000_000000.mp3"),
//!         true,
//!         None,
//!     )?;
//!     println!("ingested as {}", saved.display());
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod ingest;
pub mod net;
pub mod output;
pub mod workspace;

// Re-exports for convenience
pub use audio::convert_to_wav;
pub use config::conf_edit;
pub use error::{Error, Result};
pub use fs::{clean_filename, shorten_filename};
pub use ingest::{save_uploaded_file, UploadSource};
pub use workspace::{
    clear_directory, clear_old_output, clear_temp_folder, move_old_files, Workspace,
};
