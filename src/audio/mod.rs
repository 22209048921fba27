//! Audio format conversion.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::workspace::Workspace;

/// Sample rate the separation models expect.
const TARGET_SAMPLE_RATE: &str = "44100";

/// Convert an audio file to 16-bit PCM WAV in the ensemble directory.
///
/// Files already carrying a `.wav` extension are returned unchanged
/// without touching the encoder. A failed encoder run is logged and
/// reported as `Ok(None)` so callers can branch on the result; a missing
/// encoder binary is an error.
pub fn convert_to_wav(workspace: &Workspace, file_path: &Path) -> Result<Option<PathBuf>> {
    let extension = file_path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if extension.eq_ignore_ascii_case("wav") {
        return Ok(Some(file_path.to_path_buf()));
    }

    let stem = file_path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let wav_output = workspace.ensemble_dir.join(format!("{}.wav", stem));

    let output = Command::new("ffmpeg")
        .args(["-y", "-i"])
        .arg(file_path)
        .args(["-acodec", "pcm_s16le", "-ar", TARGET_SAMPLE_RATE])
        .arg(&wav_output)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FFmpegNotFound
            } else {
                Error::FFmpeg(format!("Failed to run ffmpeg: {}", e))
            }
        })?;

    if !output.status.success() {
        tracing::error!(
            "FFmpeg error ({}): {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
        return Ok(None);
    }

    Ok(Some(wav_output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_wav_passthrough_returns_same_path() {
        let tmp = TempDir::new().unwrap();
        let workspace = Workspace::new(tmp.path().join("mss"));
        let input = Path::new("/music/already_converted.wav");

        let result = convert_to_wav(&workspace, input).unwrap();

        // No subprocess runs, so nothing lands in the ensemble directory.
        assert_eq!(result, Some(input.to_path_buf()));
        assert!(!workspace.ensemble_dir.exists());
    }

    #[test]
    fn test_wav_passthrough_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let workspace = Workspace::new(tmp.path().join("mss"));
        let input = Path::new("/music/TRACK.WAV");

        let result = convert_to_wav(&workspace, input).unwrap();

        assert_eq!(result, Some(input.to_path_buf()));
    }
}
