//! Host value representation.
//!
//! Values reaching the gateway are loosely typed. Only the tag matters to
//! the gateway; string payloads are raw bytes with an explicit length, so
//! embedded zero bytes are ordinary content.

use crate::handle::ResourceId;
use ahash::RandomState;
use hashbrown::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

pub fn fast_hasher() -> RandomState {
    RandomState::with_seeds(0, 0, 0, 0)
}

pub fn fast_map_new<K: Eq + Hash, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(fast_hasher())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueTag {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Resource,
}

impl ValueTag {
    pub fn name(self) -> &'static str {
        match self {
            ValueTag::Null => "null",
            ValueTag::Bool => "bool",
            ValueTag::Int => "int",
            ValueTag::Float => "float",
            ValueTag::Str => "string",
            ValueTag::Resource => "resource",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<[u8]>),
    Resource(ResourceId),
}

impl Value {
    pub const NULL: Value = Value::Null;

    pub fn str(bytes: impl AsRef<[u8]>) -> Self {
        Value::Str(Rc::from(bytes.as_ref()))
    }

    #[inline]
    pub fn resource(id: ResourceId) -> Self {
        Value::Resource(id)
    }

    #[inline]
    pub fn from_i64(i: i64) -> Self {
        Value::Int(i)
    }

    #[inline]
    pub fn from_f64(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn from_bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn tag(&self) -> ValueTag {
        match self {
            Value::Null => ValueTag::Null,
            Value::Bool(_) => ValueTag::Bool,
            Value::Int(_) => ValueTag::Int,
            Value::Float(_) => ValueTag::Float,
            Value::Str(_) => ValueTag::Str,
            Value::Resource(_) => ValueTag::Resource,
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.tag().name()
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Str(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_resource(&self) -> Option<ResourceId> {
        match self {
            Value::Resource(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::str(s)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::str(b)
    }
}

impl From<ResourceId> for Value {
    fn from(id: ResourceId) -> Self {
        Value::Resource(id)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
