//! Byte streams the table can hold.

mod file;
mod memory;

pub use file::FileStream;
pub use memory::MemoryStream;

/// An open byte stream.
///
/// Counts are the only failure channel: a stream that cannot accept or
/// produce bytes reports zero instead of an error.
pub trait Stream {
    /// Writes as much of `bytes` as the stream accepts and returns that count.
    fn write(&mut self, bytes: &[u8]) -> usize;

    fn read(&mut self, buf: &mut [u8]) -> usize;

    fn is_at_end(&mut self) -> bool;

    /// Tears the stream down.
    fn close(&mut self);

    /// Called when a persistent stream is handed back to its pool instead of
    /// being closed.
    fn pooled_release(&mut self) {}
}
