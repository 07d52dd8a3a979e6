//! Live stream handles.
//!
//! Slots are addressed by `ResourceId`. Freeing a slot bumps its generation,
//! so a stale id fails to resolve instead of reaching the slot's next owner.
//! Slot indices are `u32`; the table never holds more than `MAX_SLOTS` slots.

use strand_core::ResourceId;

use super::pool::PersistentPool;
use crate::streams::Stream;

pub const MAX_SLOTS: u64 = u32::MAX as u64 + 1;

/// Pool key for persistent streams opened without a name.
pub const ANONYMOUS_POOL_KEY: &str = "";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamFlags {
    pub persistent: bool,
    pub close_protected: bool,
}

pub struct StreamEntry {
    stream: Box<dyn Stream>,
    pool_key: Option<String>,
    close_protected: bool,
}

impl StreamEntry {
    pub fn stream_mut(&mut self) -> &mut dyn Stream {
        self.stream.as_mut()
    }

    pub fn flags(&self) -> StreamFlags {
        StreamFlags {
            persistent: self.pool_key.is_some(),
            close_protected: self.close_protected,
        }
    }

    pub fn pool_key(&self) -> Option<&str> {
        self.pool_key.as_deref()
    }
}

struct Slot {
    generation: u32,
    entry: Option<StreamEntry>,
}

pub struct StreamTable {
    slots: Vec<Slot>,
    free_list: Vec<usize>,
    pool: PersistentPool,
    live: usize,
}

impl StreamTable {
    pub fn new() -> Self {
        Self::with_pool(PersistentPool::default())
    }

    pub fn with_idle_limit(max_idle_per_key: usize) -> Self {
        Self::with_pool(PersistentPool::new(max_idle_per_key))
    }

    fn with_pool(pool: PersistentPool) -> Self {
        Self {
            slots: Vec::with_capacity(16),
            free_list: Vec::new(),
            pool,
            live: 0,
        }
    }

    /// Registers a transient stream.
    pub fn open(&mut self, stream: Box<dyn Stream>) -> ResourceId {
        self.open_with(stream, StreamFlags::default())
    }

    /// Registers a stream that must not be closed through the gateway.
    pub fn open_protected(&mut self, stream: Box<dyn Stream>) -> ResourceId {
        self.open_with(
            stream,
            StreamFlags {
                close_protected: true,
                ..StreamFlags::default()
            },
        )
    }

    /// Registers `stream` with explicit flags. A persistent stream opened
    /// here is pooled under `ANONYMOUS_POOL_KEY` when released.
    pub fn open_with(&mut self, stream: Box<dyn Stream>, flags: StreamFlags) -> ResourceId {
        self.insert(StreamEntry {
            stream,
            pool_key: flags.persistent.then(|| ANONYMOUS_POOL_KEY.to_string()),
            close_protected: flags.close_protected,
        })
    }

    /// Registers a persistent stream under `key`, reusing an idle one from
    /// the pool when available and calling `make` otherwise.
    pub fn open_persistent<F>(&mut self, key: &str, make: F) -> ResourceId
    where
        F: FnOnce() -> Box<dyn Stream>,
    {
        let stream = match self.pool.take(key) {
            Some(s) => {
                log::trace!(target: "strand::table", "reusing pooled stream for '{key}'");
                s
            }
            None => make(),
        };
        self.insert(StreamEntry {
            stream,
            pool_key: Some(key.to_string()),
            close_protected: false,
        })
    }

    fn insert(&mut self, entry: StreamEntry) -> ResourceId {
        if let Some(idx) = self.free_list.pop() {
            self.live += 1;
            let slot = &mut self.slots[idx];
            slot.entry = Some(entry);
            ResourceId::new(slot_index(idx), slot.generation)
        } else {
            let index = slot_index(self.slots.len());
            self.slots.push(Slot {
                generation: 0,
                entry: Some(entry),
            });
            self.live += 1;
            ResourceId::new(index, 0)
        }
    }

    pub fn resolve(&mut self, id: ResourceId) -> Option<&mut StreamEntry> {
        let slot = self.slots.get_mut(id.slot())?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_mut()
    }

    pub fn get(&self, id: ResourceId) -> Option<&StreamEntry> {
        let slot = self.slots.get(id.slot())?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_ref()
    }

    #[inline]
    pub fn contains(&self, id: ResourceId) -> bool {
        self.get(id).is_some()
    }

    pub fn set_close_protected(&mut self, id: ResourceId, protected: bool) -> bool {
        match self.resolve(id) {
            Some(entry) => {
                entry.close_protected = protected;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: ResourceId) -> Option<StreamEntry> {
        let slot = self.slots.get_mut(id.slot())?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.slot());
        self.live -= 1;
        Some(entry)
    }

    /// Standard close: removes the handle and tears the stream down.
    pub fn close(&mut self, id: ResourceId) -> bool {
        match self.remove(id) {
            Some(mut entry) => {
                entry.stream.close();
                true
            }
            None => false,
        }
    }

    /// Pooled release: removes the handle and parks the stream under its
    /// key. A handle with no key falls back to the standard close.
    pub fn release_pooled(&mut self, id: ResourceId) -> bool {
        let Some(mut entry) = self.remove(id) else {
            return false;
        };
        match entry.pool_key.take() {
            Some(key) => {
                entry.stream.pooled_release();
                self.pool.park(&key, entry.stream);
            }
            None => entry.stream.close(),
        }
        true
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live
    }

    pub fn pool(&self) -> &PersistentPool {
        &self.pool
    }

    /// Closes every live handle and every parked stream.
    pub fn close_all(&mut self) -> usize {
        let live: Vec<ResourceId> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.entry.is_some())
            .map(|(idx, s)| ResourceId::new(slot_index(idx), s.generation))
            .collect();
        let closed = live.into_iter().filter(|&id| self.close(id)).count();
        closed + self.pool.drain()
    }
}

/// Converts a slot position into a `ResourceId` index.
///
/// Panics past `MAX_SLOTS`; slot storage runs out of memory well before that.
fn slot_index(idx: usize) -> u32 {
    match u32::try_from(idx) {
        Ok(index) => index,
        Err(_) => panic!("stream table exceeded {MAX_SLOTS} slots"),
    }
}
