//! Source folder listing and file-type classification.

use std::path::{Path, PathBuf};

use autonamer_core::error::CoreError;
use autonamer_core::models::AssetType;

/// Image extensions the analyzer accepts.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Video extensions the analyzer accepts.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "m4v"];

/// A file the analyzer will turn into an asset.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// File name including extension.
    pub name: String,
    pub asset_type: AssetType,
}

/// Classify a file extension, case-insensitively.
pub fn classify_extension(ext: &str) -> Option<AssetType> {
    let ext = ext.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(AssetType::Img)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(AssetType::Vid)
    } else {
        None
    }
}

/// List the usable files in a folder, non-recursively, sorted by file name
/// so the listing order (and therefore group seeding) is deterministic.
///
/// Unreadable folders fail the analysis; files without a recognized
/// extension are silently skipped.
pub fn list_source_files(folder: &Path) -> Result<Vec<SourceFile>, CoreError> {
    let entries = std::fs::read_dir(folder).map_err(|e| {
        CoreError::AnalysisFailed(format!("cannot read folder {}: {e}", folder.display()))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            CoreError::AnalysisFailed(format!("cannot read folder entry: {e}"))
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(asset_type) = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(classify_extension)
        else {
            continue;
        };

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        files.push(SourceFile {
            name: name.to_string(),
            path: path.clone(),
            asset_type,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn classifies_known_extensions() {
        assert_eq!(classify_extension("jpg"), Some(AssetType::Img));
        assert_eq!(classify_extension("PNG"), Some(AssetType::Img));
        assert_eq!(classify_extension("mp4"), Some(AssetType::Vid));
        assert_eq!(classify_extension("MOV"), Some(AssetType::Vid));
        assert_eq!(classify_extension("txt"), None);
        assert_eq!(classify_extension(""), None);
    }

    #[test]
    fn lists_only_recognized_files_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b_story.mp4"), b"x").unwrap();
        std::fs::write(dir.path().join("a_feed.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let files = list_source_files(dir.path()).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a_feed.jpg", "b_story.mp4"]);
        assert_eq!(files[0].asset_type, AssetType::Img);
        assert_eq!(files[1].asset_type, AssetType::Vid);
    }

    #[test]
    fn missing_folder_fails_analysis() {
        let err = list_source_files(Path::new("/nonexistent/path/for/test")).unwrap_err();
        assert_matches!(err, CoreError::AnalysisFailed(_));
    }
}
