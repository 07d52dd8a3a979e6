//! The guarded stream operations.

mod close;
mod eof;
mod exists;
mod write;

/// Operation names as they appear in diagnostics.
pub mod names {
    pub const FILE_EXISTS: &str = "file_exists";
    pub const STREAM_WRITE: &str = "stream_write";
    pub const STREAM_IS_AT_END: &str = "stream_is_at_end";
    pub const STREAM_CLOSE: &str = "stream_close";
}
