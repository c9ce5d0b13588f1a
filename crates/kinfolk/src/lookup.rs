//! File-lookup collaborator for partially-known record names

use std::path::Path;

use crate::error::{KinfolkError, Result};

/// First filename in `dir` matching a glob pattern, or `None` when nothing
/// matches.
pub fn first_match(dir: &Path, pattern: &str) -> Result<Option<String>> {
    let full = dir.join(pattern);
    let paths = glob::glob(&full.to_string_lossy()).map_err(|e| {
        KinfolkError::ConfigurationError(format!("bad glob pattern '{}': {}", pattern, e))
    })?;

    for path in paths.flatten() {
        if let Some(name) = path.file_name() {
            return Ok(Some(name.to_string_lossy().into_owned()));
        }
    }
    Ok(None)
}

/// First record in the current directory whose name starts with `stem`.
pub fn find_record_here(stem: &str) -> Result<Option<String>> {
    first_match(Path::new("."), &format!("{}*.yaml", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_first_match_finds_a_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("alice.yaml"), "Name: Alice\n").unwrap();

        let found = first_match(dir.path(), "ali*.yaml").unwrap();
        assert_eq!(found, Some("alice.yaml".to_string()));
    }

    #[test]
    fn test_first_match_absent_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(first_match(dir.path(), "nobody*.yaml").unwrap(), None);
    }

    #[test]
    fn test_bad_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let err = first_match(dir.path(), "[unclosed").unwrap_err();
        assert!(matches!(err, KinfolkError::ConfigurationError(_)));
    }
}
