/*!
 * Shard
 * Cache-line-aligned pairing of one lock and one local key collection
 */

use crate::core::key::ShardKey;
use crate::core::sync::SpinLock;
use std::collections::HashSet;

/// Local key collection, hashed with ahash for fast integer probes
type KeySet<K> = HashSet<K, ahash::RandomState>;

/// One independently locked partition of the set
///
/// Aligned to the cache line so adjacent shards in the array never share one
/// (see `topology::cache_line_size`); without the alignment, a thread
/// spinning on shard N would invalidate the line holding shard N+1.
///
/// Every operation takes the shard's own lock internally; there is no way to
/// reach the collection without it.
#[repr(align(64))]
pub(crate) struct Shard<K: ShardKey> {
    entries: SpinLock<KeySet<K>>,
}

impl<K: ShardKey> Shard<K> {
    pub(crate) fn new() -> Self {
        Self {
            entries: SpinLock::new(KeySet::with_hasher(ahash::RandomState::new())),
        }
    }

    /// Insert a key (idempotent)
    #[inline]
    pub(crate) fn insert(&self, key: K) {
        self.entries.lock().insert(key);
    }

    /// Remove a key (no-op if absent)
    #[inline]
    pub(crate) fn remove(&self, key: K) {
        self.entries.lock().remove(&key);
    }

    /// Membership test
    #[inline]
    pub(crate) fn contains(&self, key: K) -> bool {
        self.entries.lock().contains(&key)
    }

    /// Number of keys currently in this shard
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Drop every key in this shard
    #[inline]
    pub(crate) fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Invoke `f` for every key while holding the shard lock
    ///
    /// `f` runs inside the critical section; it must stay short and must not
    /// touch this set.
    pub(crate) fn for_each<F: FnMut(K)>(&self, f: &mut F) {
        let guard = self.entries.lock();
        for &key in guard.iter() {
            f(key);
        }
    }
}
