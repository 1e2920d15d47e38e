//! Size-rotated trace file.
//!
//! Lines are appended to the primary file. Once it grows past the size limit it
//! is shifted into numbered backups (`<file>.1` newest, up to `<file>.N`) and a
//! fresh primary file is started. The oldest backup falls off the end.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Rotation threshold of the primary file (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of numbered backups kept.
pub const MAX_BACKUP_FILES: usize = 3;

/// Appending writer with numbered-backup rotation.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Option<File>,
}

impl FileWriter {
    /// Writer for `file_path` with the default limits. Opens lazily.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Writer with explicit rotation limits.
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: None,
        }
    }

    /// Appends `line` and a newline, rotating first when the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error from rotation, opening or writing.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes) {
            self.file = None;
            self.rotate()?;
        }

        let file = match self.file.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.file_path)?,
        };
        let file = self.file.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return remove_if_exists(&self.file_path);
        }

        remove_if_exists(&self.backup_path(self.max_backups))?;
        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.file_path, self.backup_path(1))
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
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
