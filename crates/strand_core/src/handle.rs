//! Resource identity.

use std::fmt;

/// Handle to a stream table slot.
///
/// The generation is bumped every time a slot is freed, so an id that
/// outlived its stream never resolves to whatever reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId {
    pub index: u32,
    pub generation: u32,
}

impl ResourceId {
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    #[inline]
    pub fn slot(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}
