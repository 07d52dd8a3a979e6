//! Collaborators injected into the gateway.

use strand_core::{FileSystem, StdFileSystem};

use super::sink::{DiagnosticSink, LogSink};

pub struct Capabilities {
    pub fs: Box<dyn FileSystem>,
    pub sink: Box<dyn DiagnosticSink>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            fs: Box::new(StdFileSystem),
            sink: Box::new(LogSink),
        }
    }
}
