//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::workspace::BASE_PATH_ENV;

/// Music source-separation workspace toolkit.
#[derive(Parser, Debug)]
#[command(
    name = "mss-toolkit",
    version,
    about = "Manage the working directories and configuration of a music source-separation pipeline"
)]
pub struct Args {
    /// Base directory for all pipeline folders.
    #[arg(long, env = BASE_PATH_ENV)]
    pub base_path: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Toolkit operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the workspace directory layout and print it.
    Init,

    /// Wipe and recreate the old-output archive directory.
    ClearOldOutput,

    /// Clear a directory's contents, keeping selected entries.
    ClearTemp {
        /// Directory to clear.
        dir: PathBuf,

        /// Entry names to preserve.
        #[arg(long = "keep")]
        keep: Vec<String>,
    },

    /// Archive current outputs into the old-output directory.
    Archive {
        /// Output directory to archive; defaults to the workspace output
        /// directory.
        dir: Option<PathBuf>,
    },

    /// Convert an audio file to 16-bit 44.1 kHz WAV.
    Convert {
        /// Audio file to convert.
        file: PathBuf,
    },

    /// Copy a file into the workspace, normalizing input names.
    Ingest {
        /// File to ingest.
        file: PathBuf,

        /// Treat the file as pipeline input and normalize its name.
        #[arg(long)]
        input: bool,

        /// Explicit target directory.
        #[arg(long)]
        target_dir: Option<PathBuf>,
    },

    /// Patch chunk size and overlap into an inference configuration.
    PatchConfig {
        /// YAML configuration file to edit.
        file: PathBuf,

        /// Chunk size to write into the audio section.
        #[arg(long)]
        chunk_size: u64,

        /// Overlap count to write into the inference section.
        #[arg(long)]
        overlap: u64,
    },

    /// Print a random port for ad-hoc local servers.
    Port,
}
