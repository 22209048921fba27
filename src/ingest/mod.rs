//! Upload ingestion.
//!
//! Persists uploaded or referenced files into the workspace, normalizing
//! input filenames so the pipeline sees stable `<title><ext>` names.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result};
use crate::workspace::Workspace;

/// Known media file extensions, in match priority order.
pub const MEDIA_EXTENSIONS: [&str; 7] =
    [".mp3", ".wav", ".flac", ".aac", ".ogg", ".m4a", ".mp4"];

/// Timestamp fragments appended by recording tools, in strip order.
const TIMESTAMP_PATTERNS: [&str; 4] = [r"_\d{8}_\d{6}_\d{6}", r"_\d{14}", r"_\d{10}", r"_\d+"];

/// An uploaded file: either an open byte stream with an associated name,
/// or a path to an existing file that should be copied.
pub enum UploadSource {
    /// Byte stream handed over by an upload widget.
    Stream {
        name: String,
        reader: Box<dyn Read>,
    },
    /// File already on disk.
    PathRef(PathBuf),
}

impl UploadSource {
    /// Wrap an open reader and its associated filename.
    pub fn stream(name: impl Into<String>, reader: impl Read + 'static) -> Self {
        Self::Stream {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    /// Reference a file already on disk.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::PathRef(path.into())
    }

    fn original_filename(&self) -> String {
        let name = match self {
            Self::Stream { name, .. } => Path::new(name),
            Self::PathRef(path) => path.as_path(),
        };
        name.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Persist an uploaded file into the workspace.
///
/// The target directory is the explicit override when given, otherwise the
/// input or output role directory depending on `is_input`. Input names are
/// normalized; output names are used verbatim. An existing file at the
/// target path is replaced.
pub fn save_uploaded_file(
    workspace: &Workspace,
    source: UploadSource,
    is_input: bool,
    target_dir: Option<&Path>,
) -> Result<PathBuf> {
    let target_dir = target_dir.unwrap_or(if is_input {
        &workspace.input_dir
    } else {
        &workspace.output_dir
    });

    let original_filename = source.original_filename();
    if original_filename.is_empty() {
        return Err(Error::InvalidFilename(
            "uploaded file has no usable name".to_string(),
        ));
    }

    let final_name = if is_input {
        normalize_input_name(&original_filename)
    } else {
        original_filename
    };

    let target_path = target_dir.join(&final_name);
    fs::create_dir_all(target_dir)?;

    if target_path.exists() {
        fs::remove_file(&target_path)?;
    }

    match source {
        UploadSource::Stream { mut reader, .. } => {
            let mut contents = Vec::new();
            reader.read_to_end(&mut contents)?;
            fs::write(&target_path, contents)?;
        }
        UploadSource::PathRef(path) => {
            fs::copy(&path, &target_path)?;
        }
    }

    tracing::info!("File saved successfully: {}", final_name);
    Ok(target_path)
}

/// Reduce an uploaded input filename to a clean `<title><ext>` form.
///
/// Timestamp fragments are removed first, then any embedded media
/// extension text, then trailing separators. The real extension is taken
/// from the end of the original name, case-insensitively, defaulting to
/// `.wav` when none of the known extensions match.
fn normalize_input_name(original: &str) -> String {
    let mut base = original.to_string();
    for pattern in TIMESTAMP_PATTERNS {
        let re = Regex::new(pattern).unwrap();
        base = re.replace_all(&base, "").into_owned();
    }
    for ext in MEDIA_EXTENSIONS {
        base = base.replacen(ext, "", 1);
    }

    let lower = original.to_lowercase();
    let file_ext = MEDIA_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| lower.ends_with(*ext))
        .unwrap_or(".wav");

    let title = base.trim_end_matches(|c| c == '_' || c == '-' || c == ' ');
    format!("{}{}", title, file_ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace(tmp: &TempDir) -> Workspace {
        let workspace = Workspace::new(tmp.path().join("mss"));
        workspace.ensure_layout().unwrap();
        workspace
    }

    #[test]
    fn test_normalize_strips_full_timestamp() {
        assert_eq!(
            normalize_input_name("song_20231001_120000_000000.mp3"),
            "song.mp3"
        );
    }

    #[test]
    fn test_normalize_strips_epoch_suffix() {
        assert_eq!(normalize_input_name("take_1234567890.wav"), "take.wav");
        assert_eq!(normalize_input_name("take_12345678901234.flac"), "take.flac");
    }

    #[test]
    fn test_normalize_defaults_to_wav() {
        assert_eq!(normalize_input_name("capture_42.opus"), "capture.opus.wav");
    }

    #[test]
    fn test_normalize_trims_separators() {
        assert_eq!(normalize_input_name("mix - _20231001_120000_000000.m4a"), "mix.m4a");
    }

    #[test]
    fn test_normalize_extension_match_is_case_insensitive() {
        // Stripping is literal substring removal, so the uppercase text
        // stays; only the reattached extension comes from the known list.
        assert_eq!(normalize_input_name("LOUD.MP3"), "LOUD.MP3.mp3");
    }

    #[test]
    fn test_save_input_from_path() {
        let tmp = TempDir::new().unwrap();
        let workspace = workspace(&tmp);
        let src = tmp.path().join("song_20231001_120000_000000.mp3");
        fs::write(&src, b"audio-bytes").unwrap();

        let saved =
            save_uploaded_file(&workspace, UploadSource::path(&src), true, None).unwrap();

        assert_eq!(saved, workspace.input_dir.join("song.mp3"));
        assert_eq!(fs::read(&saved).unwrap(), b"audio-bytes");
        // The source is copied, not moved.
        assert!(src.exists());
    }

    #[test]
    fn test_save_output_keeps_name_verbatim() {
        let tmp = TempDir::new().unwrap();
        let workspace = workspace(&tmp);
        let src = tmp.path().join("vocals_1699999999.wav");
        fs::write(&src, b"stem").unwrap();

        let saved =
            save_uploaded_file(&workspace, UploadSource::path(&src), false, None).unwrap();

        assert_eq!(saved, workspace.output_dir.join("vocals_1699999999.wav"));
    }

    #[test]
    fn test_save_stream_writes_contents() {
        let tmp = TempDir::new().unwrap();
        let workspace = workspace(&tmp);

        let saved = save_uploaded_file(
            &workspace,
            UploadSource::stream("take_1234567890.wav", &b"RIFF"[..]),
            true,
            None,
        )
        .unwrap();

        assert_eq!(saved, workspace.input_dir.join("take.wav"));
        assert_eq!(fs::read(&saved).unwrap(), b"RIFF");
    }

    #[test]
    fn test_save_overwrites_existing_target() {
        let tmp = TempDir::new().unwrap();
        let workspace = workspace(&tmp);
        fs::write(workspace.input_dir.join("take.wav"), b"old").unwrap();

        let saved = save_uploaded_file(
            &workspace,
            UploadSource::stream("take.wav", &b"new"[..]),
            true,
            None,
        )
        .unwrap();

        assert_eq!(fs::read(&saved).unwrap(), b"new");
    }

    #[test]
    fn test_save_honors_target_dir_override() {
        let tmp = TempDir::new().unwrap();
        let workspace = workspace(&tmp);
        let custom = tmp.path().join("staging");

        let saved = save_uploaded_file(
            &workspace,
            UploadSource::stream("clip.ogg", &b"ogg"[..]),
            true,
            Some(&custom),
        )
        .unwrap();

        assert_eq!(saved, custom.join("clip.ogg"));
        assert!(custom.is_dir());
    }
}
