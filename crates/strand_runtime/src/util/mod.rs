//! Utility modules.

mod capabilities;
mod sink;

pub use capabilities::Capabilities;
pub use sink::{DiagnosticSink, LogSink, RecordingSink};
