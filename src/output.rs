//! Writing the generated SQL document to disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use humansize::{FormatSizeOptions, WINDOWS, format_size};
use tracing::info;

use crate::error::{ExportError, ExportResult};
use crate::export::ExportMode;

/// Write the document to `path`, creating parent directories as needed.
/// Returns the number of bytes written.
pub fn save_sql_file(path: &Path, contents: &str) -> ExportResult<u64> {
    validate_output_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;

    let bytes = contents.len() as u64;
    info!(path = %path.display(), size = %format_file_size(bytes), "Wrote SQL file");
    Ok(bytes)
}

/// Reject paths that cannot name a file before touching the filesystem.
pub fn validate_output_path(path: &Path) -> ExportResult<()> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::invalid_input("Output path is empty"));
    }
    if path.is_dir() {
        return Err(ExportError::invalid_input(format!(
            "Output path {} is a directory",
            path.display()
        )));
    }
    Ok(())
}

/// Default output filename: `export_<database>_<mode>_<timestamp>.sql`.
pub fn default_filename(database: &str, mode: ExportMode) -> PathBuf {
    PathBuf::from(format!(
        "export_{}_{}_{}.sql",
        database,
        mode,
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Human-readable file size with two fixed decimals (1024-based units).
pub fn format_file_size(bytes: u64) -> String {
    let options = FormatSizeOptions::from(WINDOWS)
        .decimal_places(2)
        .decimal_zeroes(2);
    format_size(bytes, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.sql");
        let bytes = save_sql_file(&path, "SELECT 1;\n").unwrap();
        assert_eq!(bytes, 10);
        assert_eq!(fs::read_to_string(&path).unwrap(), "SELECT 1;\n");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.sql");
        save_sql_file(&path, "-- empty\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_directory_path_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_output_path(dir.path()).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_default_filename_shape() {
        let name = default_filename("shop", ExportMode::Both);
        let name = name.to_string_lossy();
        assert!(name.starts_with("export_shop_both_"));
        assert!(name.ends_with(".sql"));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0.00 B");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
    }
}
