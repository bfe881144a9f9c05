//! Output path resolution.

use crate::area_code::AreaCode;
use crate::error::{Result, WordlistError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default wordlist file name: `<area_code>-wordlist.txt`.
pub fn default_output_path(area_code: &AreaCode) -> PathBuf {
    PathBuf::from(format!("{}-wordlist.txt", area_code))
}

/// Pick the output path and make sure it can be created as a file.
///
/// Falls back to [`default_output_path`] when `output` is `None`. An
/// existing directory at the target is rejected; missing parent
/// directories are created.
pub fn resolve_output_path(area_code: &AreaCode, output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(p) => p.to_path_buf(),
        None => default_output_path(area_code),
    };

    if path.is_dir() {
        return Err(WordlistError::OutputIsDirectory(path));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> AreaCode {
        AreaCode::parse("721").unwrap()
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(&area()),
            PathBuf::from("721-wordlist.txt")
        );
        assert_eq!(
            resolve_output_path(&area(), None).unwrap(),
            PathBuf::from("721-wordlist.txt")
        );
    }

    #[test]
    fn test_explicit_path_kept() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.txt");
        assert_eq!(resolve_output_path(&area(), Some(&target)).unwrap(), target);
    }

    #[test]
    fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_output_path(&area(), Some(dir.path())).unwrap_err();
        assert!(matches!(err, WordlistError::OutputIsDirectory(_)));
        assert!(err.to_string().starts_with("Output path must be a file"));
    }

    #[test]
    fn test_parent_directories_created() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("lists").join("nested").join("721.txt");
        let resolved = resolve_output_path(&area(), Some(&target)).unwrap();

        assert_eq!(resolved, target);
        assert!(dir.path().join("lists").join("nested").is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn test_existing_file_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("existing.txt");
        fs::write(&target, "old").unwrap();
        assert!(resolve_output_path(&area(), Some(&target)).is_ok());
    }
}
