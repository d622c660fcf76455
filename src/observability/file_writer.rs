//! Rotating log file writer with size-based rotation and backup retention.
//!
//! Thread-safe writer handed to the `tracing-subscriber` fmt layer. When the
//! current file exceeds a size threshold it is renamed with a timestamp suffix
//! and a new file is created; old backups beyond the retention limit are
//! removed. This keeps disk usage bounded for long-lived sessions.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Cloneable rotating file writer.
///
/// Clones share one underlying file handle behind a `Mutex`, so the fmt layer
/// can mint a writer per event while all output lands in the same file. The
/// file opens lazily on first write; construction cannot fail.
#[derive(Clone)]
pub struct LogWriter {
    inner: Arc<Inner>,
}

struct Inner {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    file: Mutex<Option<File>>,
}

impl LogWriter {
    /// Creates a writer for the given path. The file is not opened until the
    /// first write.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            inner: Arc::new(Inner {
                file_path,
                file: Mutex::new(None),
            }),
        }
    }

    fn write_all_locked(&self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .inner
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut file)?;

        if file.is_none() {
            let opened = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.inner.file_path)?;
            *file = Some(opened);
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        io::Write::write_all(handle, buf)?;

        Ok(buf.len())
    }

    /// Checks file size and rotates if necessary, dropping the open handle so
    /// the next write reopens the fresh file.
    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.inner.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.log.<unix_timestamp>` and trims
    /// backups beyond the retention limit.
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.inner.file_path.with_extension(format!("log.{timestamp}"));

        if self.inner.file_path.exists() {
            fs::rename(&self.inner.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Removes backup files beyond the retention limit, newest first.
    /// Individual deletion failures are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .inner
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let file_stem = self
            .inner
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".log."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_all_locked(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .inner
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;
        if let Some(handle) = file.as_mut() {
            io::Write::flush(handle)?;
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl std::fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogWriter")
            .field("file_path", &self.inner.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn writes_append_to_the_target_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medidex.log");

        let mut writer = LogWriter::new(path.clone());
        writer.write_all(b"first line\n").unwrap();
        writer.write_all(b"second line\n").unwrap();
        writer.flush().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn clones_share_the_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medidex.log");

        let mut a = LogWriter::new(path.clone());
        let mut b = a.make_writer();
        a.write_all(b"a\n").unwrap();
        b.write_all(b"b\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "a\nb\n");
    }

    #[test]
    fn missing_parent_directory_fails_the_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("medidex.log");

        let mut writer = LogWriter::new(path);
        assert!(writer.write_all(b"x").is_err());
    }
}
