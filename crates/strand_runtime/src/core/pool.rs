//! Idle persistent streams, keyed by the name they were opened under.

use smallvec::SmallVec;
use strand_core::{FastHashMap, fast_map_new};

use crate::streams::Stream;

type IdleList = SmallVec<[Box<dyn Stream>; 2]>;

pub struct PersistentPool {
    idle: FastHashMap<String, IdleList>,
    max_idle_per_key: usize,
    /// Streams parked since creation.
    pub parked_count: usize,
    /// Streams closed on release because their key was already full.
    pub overflow_count: usize,
}

impl PersistentPool {
    pub fn new(max_idle_per_key: usize) -> Self {
        Self {
            idle: fast_map_new(),
            max_idle_per_key,
            parked_count: 0,
            overflow_count: 0,
        }
    }

    /// Parks `stream` under `key`. Returns false when the key is full and the
    /// stream was closed instead.
    pub fn park(&mut self, key: &str, mut stream: Box<dyn Stream>) -> bool {
        if self.idle_count(key) >= self.max_idle_per_key {
            stream.close();
            self.overflow_count += 1;
            log::debug!(target: "strand::pool", "pool key '{key}' full; closed released stream");
            return false;
        }
        let list = self.idle.entry_ref(key).or_default();
        list.push(stream);
        self.parked_count += 1;
        log::trace!(target: "strand::pool", "parked stream under '{key}' ({} idle)", list.len());
        true
    }

    pub fn take(&mut self, key: &str) -> Option<Box<dyn Stream>> {
        let list = self.idle.get_mut(key)?;
        let stream = list.pop();
        if list.is_empty() {
            self.idle.remove(key);
        }
        stream
    }

    pub fn idle_count(&self, key: &str) -> usize {
        self.idle.get(key).map_or(0, |l| l.len())
    }

    pub fn total_idle(&self) -> usize {
        self.idle.values().map(|l| l.len()).sum()
    }

    /// Closes every parked stream.
    pub fn drain(&mut self) -> usize {
        let mut closed = 0;
        for (_, list) in self.idle.drain() {
            for mut stream in list {
                stream.close();
                closed += 1;
            }
        }
        closed
    }
}

impl Default for PersistentPool {
    fn default() -> Self {
        Self::new(crate::GatewayConfig::default().max_idle_persistent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStream;

    #[test]
    fn take_returns_parked_stream_once() {
        let mut pool = PersistentPool::new(4);
        assert!(pool.park("db", Box::new(MemoryStream::new())));
        assert_eq!(pool.idle_count("db"), 1);
        assert!(pool.take("db").is_some());
        assert!(pool.take("db").is_none());
        assert_eq!(pool.total_idle(), 0);
    }

    #[test]
    fn full_key_closes_overflow() {
        let mut pool = PersistentPool::new(1);
        assert!(pool.park("k", Box::new(MemoryStream::new())));
        assert!(!pool.park("k", Box::new(MemoryStream::new())));
        assert_eq!(pool.idle_count("k"), 1);
        assert_eq!(pool.overflow_count, 1);
        assert_eq!(pool.parked_count, 1);
    }

    #[test]
    fn zero_cap_never_creates_map_entries() {
        let mut pool = PersistentPool::new(0);
        for key in ["a", "b", "c"] {
            assert!(!pool.park(key, Box::new(MemoryStream::new())));
        }
        assert!(pool.idle.is_empty());
        assert_eq!(pool.overflow_count, 3);
    }

    #[test]
    fn drain_empties_every_key() {
        let mut pool = PersistentPool::new(4);
        pool.park("a", Box::new(MemoryStream::new()));
        pool.park("b", Box::new(MemoryStream::new()));
        pool.park("b", Box::new(MemoryStream::new()));
        assert_eq!(pool.drain(), 3);
        assert_eq!(pool.total_idle(), 0);
    }
}
