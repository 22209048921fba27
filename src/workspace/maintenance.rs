//! Directory maintenance and output archiving.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::workspace::Workspace;

/// Delete every file directly inside `dir`.
///
/// Each entry is removed as a regular file; entries that cannot be removed
/// that way (subdirectories included) are logged and skipped.
pub fn clear_directory(dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("{} could not be listed: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!("{} could not be deleted: {}", path.display(), e);
        }
    }
}

/// Clear a directory's contents while preserving the named entries.
///
/// Returns `false` when the path is missing or not a directory. Individual
/// deletion failures are logged and do not abort the sweep, so the return
/// value is `true` once every entry has been visited.
pub fn clear_temp_folder(folder_path: &Path, exclude_items: &[&str]) -> bool {
    if !folder_path.exists() {
        tracing::warn!("Directory does not exist: {}", folder_path.display());
        return false;
    }
    if !folder_path.is_dir() {
        tracing::warn!("Path is not a directory: {}", folder_path.display());
        return false;
    }

    let entries = match fs::read_dir(folder_path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Critical error clearing {}: {}", folder_path.display(), e);
            return false;
        }
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        if exclude_items.iter().any(|item| name == *item) {
            continue;
        }

        let path = entry.path();
        let removal = match entry.file_type() {
            // Symlinks are unlinked, never followed.
            Ok(file_type) if file_type.is_dir() => fs::remove_dir_all(&path),
            _ => fs::remove_file(&path),
        };
        if let Err(e) = removal {
            tracing::warn!("Error deleting {}: {}", path.display(), e);
        }
    }

    true
}

/// Wipe and recreate the old-output directory.
///
/// Returns a human-readable status string and never fails.
pub fn clear_old_output(workspace: &Workspace) -> String {
    let old_output = &workspace.old_output_dir;

    if !old_output.exists() {
        return "❌ Old output folder does not exist".to_string();
    }

    match fs::remove_dir_all(old_output).and_then(|_| fs::create_dir_all(old_output)) {
        Ok(()) => "✅ Old outputs successfully cleared!".to_string(),
        Err(e) => {
            let error_msg = format!("🔥 Error: {}", e);
            tracing::error!("{}", error_msg);
            error_msg
        }
    }
}

/// Move every file in `output_dir` into the old-output directory, tagging
/// each name with an `_old` suffix before the extension.
pub fn move_old_files(workspace: &Workspace, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(&workspace.old_output_dir)?;

    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let new_name = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}_old.{}", stem, ext),
            None => format!("{}_old", stem),
        };
        fs::rename(&path, workspace.old_output_dir.join(new_name))?;
    }

    Ok(())
}
