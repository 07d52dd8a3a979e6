use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};

use super::Stream;

/// Stream over an open file.
///
/// End-of-stream holds while the position is at or past the file length,
/// so it turns true as soon as the last byte has been read.
#[derive(Debug)]
pub struct FileStream {
    file: Option<File>,
    path: PathBuf,
}

impl FileStream {
    /// Creates (or truncates) `path` for reading and writing.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.as_ref())?;
        Ok(Self::from_file(file, path.as_ref()))
    }

    pub fn open_read(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::from_file(file, path.as_ref()))
    }

    pub fn open_append(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path.as_ref())?;
        Ok(Self::from_file(file, path.as_ref()))
    }

    fn from_file(file: File, path: &Path) -> Self {
        Self {
            file: Some(file),
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.file.is_none()
    }
}

impl Stream for FileStream {
    fn write(&mut self, bytes: &[u8]) -> usize {
        let Some(file) = self.file.as_mut() else {
            return 0;
        };
        match file.write(bytes) {
            Ok(n) => n,
            Err(e) => {
                log::debug!(target: "strand::stream", "write to {} failed: {e}", self.path.display());
                0
            }
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let Some(file) = self.file.as_mut() else {
            return 0;
        };
        match file.read(buf) {
            Ok(n) => n,
            Err(e) => {
                log::debug!(target: "strand::stream", "read from {} failed: {e}", self.path.display());
                0
            }
        }
    }

    fn is_at_end(&mut self) -> bool {
        let Some(file) = self.file.as_mut() else {
            return true;
        };
        let pos = file.stream_position();
        let len = file.metadata().map(|m| m.len());
        match (pos, len) {
            (Ok(pos), Ok(len)) => pos >= len,
            (Err(e), _) | (_, Err(e)) => {
                log::debug!(target: "strand::stream", "eof check on {} failed: {e}", self.path.display());
                true
            }
        }
    }

    fn close(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(e) = file.flush() {
                log::debug!(target: "strand::stream", "flush of {} failed: {e}", self.path.display());
            }
        }
    }
}
