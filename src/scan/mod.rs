pub mod filesystem;

use crate::error::{LexiscoreError, Result};
use crate::types::config::LanguageConfig;
use crate::types::report::SkippedFile;
use filesystem::list_files;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// File name up to the first `.`.
    pub id: String,
}

/// Source files found in the input directory, plus entries that could not be inspected.
#[derive(Debug, Default)]
pub struct Discovery {
    pub sources: Vec<SourceFile>,
    pub skipped: Vec<SkippedFile>,
}

pub fn discover(input_dir: &Path, language: &LanguageConfig) -> Result<Discovery> {
    if !input_dir.is_dir() {
        return Err(LexiscoreError::InputDirNotFound(
            input_dir.display().to_string(),
        ));
    }

    let listing = list_files(input_dir)?;
    let sources = listing
        .files
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_string();
            if !language.matches_extension(&name) {
                tracing::debug!(file = %name, "skipping non-source entry");
                return None;
            }
            let id = file_id(&name).to_string();
            Some(SourceFile { path, id })
        })
        .collect();
    Ok(Discovery {
        sources,
        skipped: listing.unreadable,
    })
}

fn file_id(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or_default()
}
