use crate::error::{LexiscoreError, Result};
use crate::types::report::SkippedFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct DirListing {
    pub files: Vec<PathBuf>,
    /// Entries that could not be inspected, such as dangling symlinks.
    pub unreadable: Vec<SkippedFile>,
}

/// Regular files directly inside `dir`, sorted by file name. Symlinks are
/// followed. Fails when `dir` itself cannot be listed.
pub fn list_files(dir: &Path) -> Result<DirListing> {
    std::fs::read_dir(dir).map_err(|e| {
        LexiscoreError::InputDirUnreadable(format!("{}: {}", dir.display(), e))
    })?;

    let mut listing = DirListing::default();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                listing.files.push(entry.path().to_path_buf());
            }
            Ok(_) => {}
            Err(e) => {
                let path = e
                    .path()
                    .map_or_else(|| dir.display().to_string(), |p| p.display().to_string());
                tracing::warn!(path = %path, error = %e, "cannot inspect directory entry");
                listing.unreadable.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(listing)
}

/// Reads a source file as right-trimmed lines.
pub fn read_source_lines(path: &Path) -> Result<Vec<String>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| LexiscoreError::UnreadableSource {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    Ok(content
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect())
}
