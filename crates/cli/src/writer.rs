// Theme file writers

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where rendered theme documents go.
///
/// Overwrites existing files. Errors abort the run; files written before
/// the failure stay in place.
pub trait ThemeWriter {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes to the filesystem. Does not create missing directories.
#[derive(Debug, Default)]
pub struct FsWriter;

impl ThemeWriter for FsWriter {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Collects writes in memory
#[derive(Debug, Default)]
pub struct MemoryWriter {
    pub files: Vec<(PathBuf, String)>,
}

impl ThemeWriter for MemoryWriter {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        match self.files.iter_mut().find(|(p, _)| p == path) {
            Some((_, existing)) => *existing = contents.to_string(),
            None => self.files.push((path.to_path_buf(), contents.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_writer_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");

        let mut writer = FsWriter;
        writer.write(&path, "first").unwrap();
        writer.write(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_fs_writer_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("theme.json");

        let err = FsWriter.write(&path, "{}").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_writer_overwrites() {
        let mut writer = MemoryWriter::default();
        writer.write(Path::new("a.json"), "1").unwrap();
        writer.write(Path::new("a.json"), "2").unwrap();
        assert_eq!(writer.files, vec![(PathBuf::from("a.json"), "2".to_string())]);
    }
}
