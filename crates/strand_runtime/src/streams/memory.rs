use super::Stream;

/// In-memory stream with a read cursor.
///
/// Writes append at the end; reads consume from the cursor. With a capacity
/// limit, a write that does not fit is accepted only up to the limit.
#[derive(Debug, Default)]
pub struct MemoryStream {
    buf: Vec<u8>,
    pos: usize,
    capacity: Option<usize>,
    closed: bool,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            capacity: Some(limit),
            ..Self::default()
        }
    }

    /// A readable stream pre-filled with `data`.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: data.into(),
            ..Self::default()
        }
    }

    pub fn contents(&self) -> &[u8] {
        &self.buf
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Stream for MemoryStream {
    fn write(&mut self, bytes: &[u8]) -> usize {
        if self.closed {
            return 0;
        }
        let room = match self.capacity {
            Some(cap) => cap.saturating_sub(self.buf.len()),
            None => bytes.len(),
        };
        let n = room.min(bytes.len());
        self.buf.extend_from_slice(&bytes[..n]);
        n
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        if self.closed {
            return 0;
        }
        let n = self.remaining().min(buf.len());
        buf[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        n
    }

    fn is_at_end(&mut self) -> bool {
        self.pos >= self.buf.len()
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn pooled_release(&mut self) {
        // A parked stream starts its next lease with nothing left unread.
        self.pos = self.buf.len();
    }
}
