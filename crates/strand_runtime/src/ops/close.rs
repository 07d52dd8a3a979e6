use strand_core::Value;

use super::names;
use crate::{Gateway, GatewayError};

impl Gateway {
    /// Releases the stream behind `stream`.
    ///
    /// Persistent streams go back to their pool; transient ones are torn
    /// down. Protected streams are left open. The caller must not use the
    /// handle again after a `true` result.
    pub fn stream_close(&mut self, stream: &Value) -> bool {
        let id = match Self::expect_resource(names::STREAM_CLOSE, "stream", stream) {
            Ok(id) => id,
            Err(e) => {
                self.warn(names::STREAM_CLOSE, &e);
                return false;
            }
        };
        let Some(flags) = self.streams.get(id).map(|entry| entry.flags()) else {
            self.warn(names::STREAM_CLOSE, &GatewayError::UnresolvableHandle(id));
            return false;
        };
        if flags.close_protected {
            self.warn(names::STREAM_CLOSE, &GatewayError::ProtectedHandle(id));
            return false;
        }
        if flags.persistent {
            log::trace!(target: "strand::gateway", "stream_close: pooled release of {id}");
            self.streams.release_pooled(id)
        } else {
            log::trace!(target: "strand::gateway", "stream_close: closing {id}");
            self.streams.close(id)
        }
    }
}
