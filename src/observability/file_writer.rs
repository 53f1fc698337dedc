//! Size-rotated trace file.
//!
//! Lines are appended to one file. Before each write the file size is checked;
//! past the limit the file is renamed to `<name>.<timestamp>` and a fresh one
//! is started. Only the newest backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Rotation threshold (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the active one.
pub const MAX_BACKUP_FILES: usize = 3;

/// Appends lines to a file, rotating it when it grows too large.
///
/// The file is opened lazily on the first write.
pub struct FileWriter {
    file_path: PathBuf,
    file: Option<File>,
    max_bytes: u64,
    max_backups: usize,
}

impl FileWriter {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            file: None,
            max_bytes,
            max_backups,
        }
    }

    /// Writes `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes) {
            self.file = None;
            self.rotate()?;
        }

        if self.file.is_none() {
            self.file = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }

        if let Some(file) = self.file.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.9f");
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{stamp}"));
        fs::rename(&self.file_path, PathBuf::from(backup))?;
        self.prune_backups()
    }

    /// Deletes all but the newest `max_backups` rotated files.
    fn prune_backups(&self) -> io::Result<()> {
        let (Some(dir), Some(name)) = (
            self.file_path.parent(),
            self.file_path.file_name().and_then(|n| n.to_str()),
        ) else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_backup(path, &prefix))
            .collect();

        // Timestamps sort lexicographically; newest first.
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

fn is_backup(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(prefix))
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let mut writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
        assert_eq!(file_count(dir.path()), 1);
    }

    #[test]
    fn test_rotates_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let mut writer = FileWriter::with_limits(path.clone(), 8, 2);

        for i in 0..5 {
            writer.write_line(&format!("line number {i}")).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line number 4\n");
        assert_eq!(file_count(dir.path()), 3);
    }

    #[test]
    fn test_unrelated_files_survive_pruning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        fs::write(dir.path().join("albums.json"), "[]").unwrap();
        let mut writer = FileWriter::with_limits(path, 1, 0);

        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        assert!(dir.path().join("albums.json").exists());
        assert_eq!(file_count(dir.path()), 2);
    }
}
