//! Pre-initialization checks on the target directory.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Where `folio init` writes the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `folio init`: the current directory, which must be empty
    CurrentDir,
    /// `folio init <name>`: a new subdirectory, which must not exist yet
    NewDir,
}

impl InitMode {
    pub const fn from_name(has_name: bool) -> Self {
        if has_name { Self::NewDir } else { Self::CurrentDir }
    }
}

pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir if !is_empty(root)? => bail!(
            "Current directory is not empty.\n\
             Use `folio init <name>` to create the project in a new subdirectory."
        ),
        InitMode::NewDir if root.exists() => bail!(
            "'{}' already exists.\n\
             Choose a different name or remove the existing directory.",
            root.display()
        ),
        _ => Ok(()),
    }
}

/// A missing directory counts as empty.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?;
    Ok(entries.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_current_dir_must_be_empty() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());

        fs::write(temp.path().join("notes.txt"), "x").unwrap();
        let err = validate_target(temp.path(), InitMode::CurrentDir).unwrap_err();
        assert!(err.to_string().contains("not empty"));
    }

    #[test]
    fn test_new_dir_must_not_exist() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir).is_err());
        assert!(validate_target(&temp.path().join("me"), InitMode::NewDir).is_ok());
    }

    #[test]
    fn test_mode_from_name() {
        assert_eq!(InitMode::from_name(true), InitMode::NewDir);
        assert_eq!(InitMode::from_name(false), InitMode::CurrentDir);
    }
}
