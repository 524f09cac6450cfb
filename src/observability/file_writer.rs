//! Size-rotated append-only file used as the trace sink.
//!
//! Each write appends one line. Once the live file grows past the size limit
//! it is shifted to `<name>.1`, older backups move up by one, and anything
//! beyond the retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold for the trace file (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rotated backups kept next to the live file.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on the first write, so constructing one never
/// touches the filesystem.
///
/// # Example
///
/// ```no_run
/// use neonfeed::observability::RotatingFile;
///
/// let sink = RotatingFile::new("/tmp/neonfeed-otlp.json");
/// sink.write_line(r#"{"resourceSpans":[]}"#)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// A writer for `path` with the default limits.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// A writer rotating after `max_bytes` and keeping `max_backups` old files.
    pub fn with_limits(path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path: path.into(),
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `n`th backup (`neonfeed-otlp.json.2`).
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotation, opening or writing fails, or if the
    /// lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace writer lock poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::other("trace file not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    /// Shifts `.n` to `.n+1` from oldest to newest, then the live file to `.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines_without_rotating_below_limit() {
        let dir = tempfile::tempdir().unwrap();
        let sink = RotatingFile::new(dir.path().join("trace.json"));

        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        let contents = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        assert!(!sink.backup_path(1).exists());
    }

    #[test]
    fn rotates_once_the_limit_is_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let sink = RotatingFile::with_limits(dir.path().join("trace.json"), 8, 3);

        sink.write_line("0123456789").unwrap();
        sink.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(sink.backup_path(1)).unwrap(), "0123456789\n");
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "next\n");
    }

    #[test]
    fn keeps_at_most_the_configured_backups() {
        let dir = tempfile::tempdir().unwrap();
        let sink = RotatingFile::with_limits(dir.path().join("trace.json"), 1, 2);

        for line in ["aa", "bb", "cc", "dd"] {
            sink.write_line(line).unwrap();
        }

        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "dd\n");
        assert_eq!(fs::read_to_string(sink.backup_path(1)).unwrap(), "cc\n");
        assert_eq!(fs::read_to_string(sink.backup_path(2)).unwrap(), "bb\n");
        assert!(!sink.backup_path(3).exists());
    }
}
