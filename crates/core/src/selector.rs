use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "tiff", "png"];
pub const MEDIA_EXTENSIONS: &[&str] = &["jpg", "jpeg", "tiff", "png", "mp4", "mov"];

pub fn has_media_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            extensions
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

// One level only; entries come back sorted so runs are deterministic.
pub fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("could not list directory: {}", dir.display()))?;
        entries.push(entry.into_path());
    }
    Ok(entries)
}
