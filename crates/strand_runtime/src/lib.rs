//! Stream handle gateway.
//!
//! Validates loosely-typed host values, resolves them against the stream
//! table and dispatches the four guarded stream operations. Every failure is
//! reported through the return value; diagnostics go to an injected sink.

#![allow(clippy::new_without_default)]

pub mod core;
pub mod errors;
pub mod streams;
mod config;
mod gateway;
mod ops;
mod util;

// Re-exports from core/
pub use crate::core::pool::PersistentPool;
pub use crate::core::table::{ANONYMOUS_POOL_KEY, StreamEntry, StreamFlags, StreamTable};

// Re-exports from streams/
pub use streams::{FileStream, MemoryStream, Stream};

// Re-exports from util/
pub use util::{Capabilities, DiagnosticSink, LogSink, RecordingSink};

pub use config::GatewayConfig;
pub use errors::GatewayError;
pub use gateway::Gateway;
pub use ops::names;

pub use strand_core::{Existence, FileSystem, ResourceId, StdFileSystem, Value, ValueTag};
pub use strand_diag::{Diagnostic, DiagnosticKind, Severity};
