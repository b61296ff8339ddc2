//! Painted-layer cache.
//!
//! Keyed by `(LayerId, Fingerprint)`. An entry is only valid for the cell
//! size and canvas dimensions it was painted at; the compositor clears the
//! whole cache when either changes, and lookups re-check them anyway.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::render::PixelBuffer;
use crate::scene::{Fingerprint, LayerId};

/// Hit/miss counters since creation.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Deferred results dropped because the layer changed while they ran.
    pub stale_discards: u64,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    buffer: Arc<PixelBuffer>,
    cell_size: u32,
}

/// Memoizes the painted pixel buffer of each layer.
#[derive(Debug, Default)]
pub struct LayerRenderCache {
    entries: FxHashMap<(LayerId, Fingerprint), CacheEntry>,
    stats: CacheStats,
}

impl LayerRenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a painted layer, counting the outcome.
    ///
    /// An entry painted at another cell size or buffer size is a miss.
    pub fn get(
        &mut self,
        layer: LayerId,
        fingerprint: Fingerprint,
        cell_size: u32,
        width: u32,
        height: u32,
    ) -> Option<Arc<PixelBuffer>> {
        let hit = self.entries.get(&(layer, fingerprint)).filter(|e| {
            e.cell_size == cell_size && e.buffer.width() == width && e.buffer.height() == height
        });

        match hit {
            Some(entry) => {
                self.stats.hits += 1;
                log::trace!("cache hit: layer {:?} {:?}", layer, fingerprint);
                Some(Arc::clone(&entry.buffer))
            }
            None => {
                self.stats.misses += 1;
                log::trace!("cache miss: layer {:?} {:?}", layer, fingerprint);
                None
            }
        }
    }

    /// Non-counting presence check.
    pub fn contains(&self, layer: LayerId, fingerprint: Fingerprint) -> bool {
        self.entries.contains_key(&(layer, fingerprint))
    }

    /// Stores a painted layer, evicting older fingerprints of the same layer.
    pub fn insert(
        &mut self,
        layer: LayerId,
        fingerprint: Fingerprint,
        cell_size: u32,
        buffer: Arc<PixelBuffer>,
    ) {
        self.entries.retain(|(id, fp), _| *id != layer || *fp == fingerprint);
        self.entries.insert((layer, fingerprint), CacheEntry { buffer, cell_size });
    }

    /// Drops every entry of one layer.
    pub fn invalidate(&mut self, layer: LayerId) {
        let before = self.entries.len();
        self.entries.retain(|(id, _), _| *id != layer);
        if self.entries.len() != before {
            log::trace!("cache: invalidated layer {:?}", layer);
        }
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("cache: cleared {} entries", self.entries.len());
        }
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub(crate) fn record_stale_discard(&mut self) {
        self.stats.stale_discards += 1;
    }
}
