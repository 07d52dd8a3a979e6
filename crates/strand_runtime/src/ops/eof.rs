use strand_core::Value;

use super::names;
use crate::Gateway;

impl Gateway {
    /// Whether the stream behind `stream` has no more data.
    ///
    /// A non-resource argument warns and answers false; a resource that no
    /// longer resolves answers false silently.
    pub fn stream_is_at_end(&mut self, stream: &Value) -> bool {
        let id = match Self::expect_resource(names::STREAM_IS_AT_END, "stream", stream) {
            Ok(id) => id,
            Err(e) => {
                self.warn(names::STREAM_IS_AT_END, &e);
                return false;
            }
        };
        match self.streams.resolve(id) {
            Some(entry) => entry.stream_mut().is_at_end(),
            None => {
                log::debug!(target: "strand::gateway", "stream_is_at_end: resource {id} not live");
                false
            }
        }
    }
}
