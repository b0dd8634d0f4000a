use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent one generated output file.
///
/// Content is fully materialized by `render` before anything touches disk,
/// and `write` is a create-or-truncate of the destination path.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory.
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content.
    fn render(&self) -> String;

    /// Write the file to disk, creating missing parent directories.
    fn write(&self, base: &Path) -> Result<()> {
        write_file(&self.path(base), &self.render())
    }
}

/// Write `content` to `path`, creating any missing parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// A rendered file that has not been written to disk.
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Probe;

    impl GeneratedFile for Probe {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("nested").join("probe.txt")
        }

        fn render(&self) -> String {
            "probe".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_truncates_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first first first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        Probe.write(temp.path()).unwrap();

        let path = temp.path().join("nested").join("probe.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "probe");
    }
}
