//! Utility functions for directory management
//!
//! Follows the XDG Base Directory specification for portable data storage
//! across Linux distributions.
//!
//! # Directory Structure
//!
//! - Data: `~/.local/share/contactbook/` - Contacts and endpoint config
//! - State: `~/.local/state/contactbook/` - Log file
//!
//! # Example
//!
//! ```no_run
//! use contactbook::utils::{ensure_dirs, get_data_dir};
//!
//! if let Some(data_path) = get_data_dir() {
//!     ensure_dirs(&data_path).expect("Failed to create directories");
//! }
//! ```

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "contactbook", "contactbook")
}

pub fn get_data_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| pd.data_dir().to_path_buf())
}

pub fn get_state_dir() -> Option<PathBuf> {
    project_dirs().and_then(|pd| pd.state_dir().map(Path::to_path_buf))
}

/// Creates `data_dir` and the state directory, user-only on Unix.
pub fn ensure_dirs(data_dir: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700); // User read/write/execute only
        builder.recursive(true);

        builder.create(data_dir)?;
        if let Some(dir) = get_state_dir() {
            builder.create(dir)?;
        }
    }

    #[cfg(not(unix))]
    {
        std::fs::create_dir_all(data_dir)?;
        if let Some(dir) = get_state_dir() {
            std::fs::create_dir_all(dir)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dirs_creates_nested_data_dir() {
        let root = tempfile::tempdir().unwrap();
        let data = root.path().join("a").join("b");
        ensure_dirs(&data).unwrap();
        assert!(data.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_data_dir_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let data = root.path().join("data");
        ensure_dirs(&data).unwrap();
        let mode = std::fs::metadata(&data).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
