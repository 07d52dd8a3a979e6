use strand_core::{ResourceId, Value};

use super::names;
use crate::{Gateway, GatewayError};

impl Gateway {
    /// Writes `data` to the stream behind `stream` and returns the count the
    /// stream accepted, which may be short.
    ///
    /// Arguments are checked in order (`stream`, then `data`); each mismatch
    /// warns once. Empty data succeeds with 0 without touching the stream.
    /// A resource that no longer resolves fails without a warning.
    pub fn stream_write(&mut self, stream: &Value, data: &Value) -> Result<usize, GatewayError> {
        let (id, bytes) = match Self::check_write_args(stream, data) {
            Ok(args) => args,
            Err(e) => {
                self.warn(names::STREAM_WRITE, &e);
                return Err(e);
            }
        };
        if bytes.is_empty() {
            return Ok(0);
        }
        self.write_resolved(id, bytes)
    }

    /// `stream_write` for callers that ignore the result.
    ///
    /// Mismatches still warn unless `void_context_warnings` is off; nothing
    /// is returned either way.
    pub fn stream_write_discard(&mut self, stream: &Value, data: &Value) {
        let (id, bytes) = match Self::check_write_args(stream, data) {
            Ok(args) => args,
            Err(e) => {
                if self.config.void_context_warnings {
                    self.warn(names::STREAM_WRITE, &e);
                }
                return;
            }
        };
        if bytes.is_empty() {
            return;
        }
        let _ = self.write_resolved(id, bytes);
    }

    fn check_write_args<'v>(
        stream: &Value,
        data: &'v Value,
    ) -> Result<(ResourceId, &'v [u8]), GatewayError> {
        let id = Self::expect_resource(names::STREAM_WRITE, "stream", stream)?;
        let bytes = Self::expect_str(names::STREAM_WRITE, "data", data)?;
        Ok((id, bytes))
    }

    fn write_resolved(&mut self, id: ResourceId, bytes: &[u8]) -> Result<usize, GatewayError> {
        let Some(entry) = self.streams.resolve(id) else {
            log::debug!(target: "strand::gateway", "stream_write: resource {id} not live");
            return Err(GatewayError::UnresolvableHandle(id));
        };
        let written = entry.stream_mut().write(bytes);
        if written < bytes.len() {
            log::debug!(
                target: "strand::gateway",
                "stream_write: short write to {id} ({written} of {} bytes)",
                bytes.len()
            );
        }
        Ok(written)
    }
}
