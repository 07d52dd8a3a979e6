//! Core types for the strand stream gateway.
//!
//! This crate contains the fundamental types that are independent of the gateway:
//! - `Value` - Tagged host value (string, resource, or other)
//! - `ResourceId` - Generation-checked handle to a stream table slot
//! - `Capabilities` - Filesystem capability trait used for existence checks

pub mod capabilities;
pub mod handle;
pub mod value;

pub use capabilities::{Existence, FileSystem, StdFileSystem};
pub use handle::ResourceId;
pub use value::{FastHashMap, Value, ValueTag, fast_map_new};
