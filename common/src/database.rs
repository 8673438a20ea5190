//! Resolution of `DATABASE_PATH` values into SQLite connection URLs.

use std::fs::create_dir_all;
use std::io;
use std::path::Path;

/// Whether the value is already a connection URL rather than a file path.
pub fn is_database_url(path_or_url: &str) -> bool {
    path_or_url.starts_with("sqlite:")
}

/// Turns a file path into `sqlite://<path>?mode=rwc`, creating its parent
/// directory (SQLite won't). URLs such as `sqlite::memory:` pass through.
pub fn sqlite_url(path_or_url: &str) -> io::Result<String> {
    if is_database_url(path_or_url) {
        return Ok(path_or_url.to_owned());
    }

    if let Some(parent) = Path::new(path_or_url).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    Ok(format!("sqlite://{path_or_url}?mode=rwc"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_pass_through() {
        assert!(is_database_url("sqlite::memory:"));
        assert_eq!(sqlite_url("sqlite::memory:").unwrap(), "sqlite::memory:");
    }

    #[test]
    fn test_bare_file_name_needs_no_directory() {
        assert!(!is_database_url("dev.db"));
        assert_eq!(sqlite_url("dev.db").unwrap(), "sqlite://dev.db?mode=rwc");
    }

    #[test]
    fn test_file_path_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("dev.db");
        let path_str = path.to_str().unwrap();

        let url = sqlite_url(path_str).unwrap();

        assert_eq!(url, format!("sqlite://{path_str}?mode=rwc"));
        assert!(dir.path().join("data").is_dir());
    }
}
