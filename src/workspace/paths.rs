//! Base path resolution and directory layout.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::UserDirs;

use crate::error::{Error, Result};

/// Environment variable overriding the workspace base directory.
pub const BASE_PATH_ENV: &str = "MSS_BASE_PATH";

/// Default directory name under the user's home directory.
const DEFAULT_DIR_NAME: &str = "Music-Source-Separation";

/// Fixed directory layout of the separation pipeline.
///
/// Every working directory is derived from a single base path. The layout
/// is resolved once at startup and passed by reference to the operations
/// that need it.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Root of the workspace.
    pub base: PathBuf,
    /// Incoming audio files.
    pub input_dir: PathBuf,
    /// Separation results.
    pub output_dir: PathBuf,
    /// Archive for superseded results.
    pub old_output_dir: PathBuf,
    /// Scratch space for automatic ensemble runs.
    pub auto_ensemble_temp: PathBuf,
    /// Results of automatic ensemble runs.
    pub auto_ensemble_output: PathBuf,
    /// Scratch space for video extraction.
    pub video_temp: PathBuf,
    /// Staging area for format-converted audio.
    pub ensemble_dir: PathBuf,
    /// Cookie jar handed to download tools.
    pub cookie_path: PathBuf,
    /// Inference entry point script.
    pub inference_script_path: PathBuf,
}

impl Workspace {
    /// Derive the full layout from a base directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            input_dir: base.join("input"),
            output_dir: base.join("output"),
            old_output_dir: base.join("old_output"),
            auto_ensemble_temp: base.join("auto_ensemble_temp"),
            auto_ensemble_output: base.join("ensemble_folder"),
            video_temp: base.join("video_temp"),
            ensemble_dir: base.join("ensemble"),
            cookie_path: base.join("cookies.txt"),
            inference_script_path: base.join("inference.py"),
            base,
        }
    }

    /// Resolve the base directory from an explicit override, the
    /// `MSS_BASE_PATH` environment variable, or the default location under
    /// the user's home directory, in that order.
    pub fn resolve(base_override: Option<PathBuf>) -> Result<Self> {
        let base = match base_override {
            Some(base) => base,
            None => match env::var_os(BASE_PATH_ENV) {
                Some(path) => PathBuf::from(path),
                None => {
                    let dirs = UserDirs::new().ok_or_else(|| {
                        Error::Config("could not determine home directory".to_string())
                    })?;
                    dirs.home_dir().join(DEFAULT_DIR_NAME)
                }
            },
        };
        Ok(Self::new(base))
    }

    /// Create the base directory and every working directory.
    ///
    /// Idempotent: existing directories are left untouched. Creation
    /// failures are fatal.
    pub fn ensure_layout(&self) -> Result<()> {
        for dir in self.directories() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// All directories of the layout, base first.
    pub fn directories(&self) -> [&Path; 8] {
        [
            self.base.as_path(),
            self.input_dir.as_path(),
            self.output_dir.as_path(),
            self.old_output_dir.as_path(),
            self.auto_ensemble_temp.as_path(),
            self.auto_ensemble_output.as_path(),
            self.video_temp.as_path(),
            self.ensemble_dir.as_path(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout_derivation() {
        let workspace = Workspace::new("/data/mss");

        assert_eq!(workspace.base, PathBuf::from("/data/mss"));
        assert_eq!(workspace.input_dir, PathBuf::from("/data/mss/input"));
        assert_eq!(workspace.output_dir, PathBuf::from("/data/mss/output"));
        assert_eq!(workspace.old_output_dir, PathBuf::from("/data/mss/old_output"));
        assert_eq!(
            workspace.auto_ensemble_temp,
            PathBuf::from("/data/mss/auto_ensemble_temp")
        );
        assert_eq!(
            workspace.auto_ensemble_output,
            PathBuf::from("/data/mss/ensemble_folder")
        );
        assert_eq!(workspace.video_temp, PathBuf::from("/data/mss/video_temp"));
        assert_eq!(workspace.ensemble_dir, PathBuf::from("/data/mss/ensemble"));
        assert_eq!(workspace.cookie_path, PathBuf::from("/data/mss/cookies.txt"));
        assert_eq!(
            workspace.inference_script_path,
            PathBuf::from("/data/mss/inference.py")
        );
    }

    #[test]
    fn test_resolve_explicit_override() {
        let workspace = Workspace::resolve(Some(PathBuf::from("/tmp/override"))).unwrap();
        assert_eq!(workspace.base, PathBuf::from("/tmp/override"));
    }

    #[test]
    fn test_ensure_layout_creates_directories() {
        let tmp = TempDir::new().unwrap();
        let workspace = Workspace::new(tmp.path().join("mss"));

        workspace.ensure_layout().unwrap();

        for dir in workspace.directories() {
            assert!(dir.is_dir(), "missing directory: {}", dir.display());
        }
    }

    #[test]
    fn test_ensure_layout_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let workspace = Workspace::new(tmp.path().join("mss"));

        workspace.ensure_layout().unwrap();
        workspace.ensure_layout().unwrap();

        assert!(workspace.input_dir.is_dir());
    }
}
