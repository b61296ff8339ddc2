//! Layer compositor: rasterize → paint → cache → composite.
//!
//! For each visible layer, back to front:
//! 1. look up the painted buffer by `(LayerId, Fingerprint)`
//! 2. on a miss, rasterize (through the executor), paint, and cache it
//! 3. composite the buffer source-over onto the surface
//!
//! The cache has one writer, the compositor itself. Rasterization may run on
//! worker threads, but painting and cache writes happen on the caller's
//! thread in layer order.

mod config;
mod error;
mod executor;

pub use config::{ConfigError, RenderConfig};
pub use error::RenderError;
pub use executor::{InlineExecutor, PoolExecutor, RasterExecutor};

use std::sync::mpsc;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::cache::{CacheStats, LayerRenderCache};
use crate::raster::{self, GlyphMap};
use crate::render::{paint_glyph_map, PixelBuffer};
use crate::scene::{Fingerprint, Layer, LayerId};
use crate::text::{FontId, FontLoadError, FontSystem};

/// Handle to a background rasterization started by [`Compositor::request_raster`].
#[must_use = "a raster ticket does nothing until passed to Compositor::complete"]
pub struct RasterTicket {
    layer: LayerId,
    fingerprint: Fingerprint,
    seq: u64,
    visible: bool,
    rx: mpsc::Receiver<GlyphMap>,
}

impl RasterTicket {
    #[inline]
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// Layer content the result was computed from.
    #[inline]
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }
}

/// What [`Compositor::complete`] did with a ticket.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TicketOutcome {
    /// The result was cached and composited.
    Painted,
    /// A newer request or an invalidation superseded it.
    Stale,
    /// The layer was hidden at request time; nothing was rasterized.
    Hidden,
    /// The background job died without producing a result.
    Lost,
}

#[derive(Debug, Copy, Clone)]
struct Pending {
    fingerprint: Fingerprint,
    seq: u64,
}

pub struct Compositor {
    config: RenderConfig,
    cache: LayerRenderCache,
    fonts: FontSystem,
    executor: Box<dyn RasterExecutor>,
    in_flight: FxHashMap<LayerId, Pending>,
    next_seq: u64,
}

impl Compositor {
    /// Creates a compositor with the executor selected by `config.worker_threads`.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let executor: Box<dyn RasterExecutor> = match config.worker_threads {
            Some(0) => Box::new(InlineExecutor),
            threads => Box::new(PoolExecutor::new(threads)?),
        };
        Self::with_executor(config, executor)
    }

    pub fn with_executor(config: RenderConfig, executor: Box<dyn RasterExecutor>) -> Result<Self, RenderError> {
        config.validate()?;
        log::info!(
            "compositor: {}x{} canvas, {} px cells",
            config.canvas_width,
            config.canvas_height,
            config.cell_size
        );
        Ok(Self {
            config,
            cache: LayerRenderCache::new(),
            fonts: FontSystem::new(),
            executor,
            in_flight: FxHashMap::default(),
            next_seq: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[inline]
    pub fn cache(&self) -> &LayerRenderCache {
        &self.cache
    }

    #[inline]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn fonts_mut(&mut self) -> &mut FontSystem {
        &mut self.fonts
    }

    /// Adds a font to the fallback chain.
    ///
    /// Cached layers are dropped since text may now paint differently.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let id = self.fonts.load_font(bytes)?;
        self.cache.clear();
        Ok(id)
    }

    /// Pure glyph-map computation; never touches the cache.
    pub fn rasterize_layer(&self, layer: &Layer) -> GlyphMap {
        raster::rasterize_layer(layer)
    }

    /// A canvas-sized surface cleared to the configured background.
    pub fn new_surface(&self) -> PixelBuffer {
        PixelBuffer::filled(self.config.canvas_width, self.config.canvas_height, self.config.background)
    }

    /// Paints one layer onto `surface`, using the cache when possible.
    ///
    /// Hidden layers are skipped; locked layers paint normally.
    pub fn paint_layer(&mut self, surface: &mut PixelBuffer, layer: &Layer) {
        if !layer.visible {
            return;
        }
        let fingerprint = layer.fingerprint();
        let buffer = match self.lookup(layer.id, fingerprint) {
            Some(buffer) => buffer,
            None => {
                let map = raster::rasterize_layer(layer);
                self.store(layer.id, fingerprint, &map)
            }
        };
        surface.draw_over(&buffer);
    }

    /// Paints a full layer stack onto `surface`, back to front.
    ///
    /// Every cache miss is rasterized through the executor and awaited before
    /// anything is painted.
    pub fn paint_layers(&mut self, surface: &mut PixelBuffer, layers: &[Layer]) {
        let visible: Vec<(&Layer, Fingerprint)> =
            layers.iter().filter(|l| l.visible).map(|l| (l, l.fingerprint())).collect();

        let cached: Vec<Option<Arc<PixelBuffer>>> =
            visible.iter().map(|&(l, fp)| self.lookup(l.id, fp)).collect();

        let misses: Vec<&Layer> = visible
            .iter()
            .zip(&cached)
            .filter(|(_, hit)| hit.is_none())
            .map(|(&(l, _), _)| l)
            .collect();
        let mut fresh = self.executor.rasterize_all(&misses).into_iter();
        if !misses.is_empty() {
            log::debug!("frame: {} of {} layers rasterized", misses.len(), visible.len());
        }

        for (&(layer, fingerprint), hit) in visible.iter().zip(cached) {
            let buffer = match hit {
                Some(buffer) => buffer,
                None => {
                    let Some(map) = fresh.next() else {
                        log::warn!("executor returned too few results; layer {:?} not painted", layer.id);
                        continue;
                    };
                    self.store(layer.id, fingerprint, &map)
                }
            };
            surface.draw_over(&buffer);
        }
    }

    /// Renders a full frame onto a fresh background-filled surface.
    pub fn render_frame(&mut self, layers: &[Layer]) -> PixelBuffer {
        let mut surface = self.new_surface();
        self.paint_layers(&mut surface, layers);
        surface
    }

    /// Forgets a layer's cached buffer and any raster request in flight for it.
    ///
    /// Call this from the same thread that mutates the layer.
    pub fn invalidate_layer(&mut self, layer: LayerId) {
        self.cache.invalidate(layer);
        self.in_flight.remove(&layer);
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Changes the cell size. Clears the cache when the size actually changes.
    pub fn set_cell_size(&mut self, cell_size: u32) -> Result<(), ConfigError> {
        if cell_size == self.config.cell_size {
            return Ok(());
        }
        let next = RenderConfig { cell_size, ..self.config.clone() };
        next.validate()?;
        log::debug!("cell size {} -> {}", self.config.cell_size, cell_size);
        self.config = next;
        self.cache.clear();
        Ok(())
    }

    /// Changes the canvas size. Clears the cache when the size actually changes.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        if (width, height) == (self.config.canvas_width, self.config.canvas_height) {
            return Ok(());
        }
        let next = RenderConfig { canvas_width: width, canvas_height: height, ..self.config.clone() };
        next.validate()?;
        log::debug!("canvas resized to {}x{}", width, height);
        self.config = next;
        self.cache.clear();
        Ok(())
    }

    /// Starts rasterizing `layer` in the background.
    ///
    /// The ticket records the layer's fingerprint at request time. A later
    /// request for the same layer, or [`invalidate_layer`](Self::invalidate_layer),
    /// makes it stale. Hidden layers still supersede older requests but are
    /// never rasterized.
    pub fn request_raster(&mut self, layer: &Layer) -> RasterTicket {
        let seq = self.next_seq;
        self.next_seq += 1;
        let fingerprint = layer.fingerprint();
        self.in_flight.insert(layer.id, Pending { fingerprint, seq });

        let (tx, rx) = mpsc::channel();
        if layer.visible {
            let snapshot = layer.clone();
            self.executor.spawn(Box::new(move || {
                // Receiver may be gone if the ticket was dropped.
                let _ = tx.send(raster::rasterize_layer(&snapshot));
            }));
        }

        RasterTicket { layer: layer.id, fingerprint, seq, visible: layer.visible, rx }
    }

    /// Waits for a ticket's result and paints it if it is still current.
    ///
    /// Stale and hidden results are dropped without touching the cache or
    /// `surface`.
    pub fn complete(&mut self, ticket: RasterTicket, surface: &mut PixelBuffer) -> TicketOutcome {
        let result = if ticket.visible { ticket.rx.recv().ok() } else { None };

        let current = self.in_flight.get(&ticket.layer).is_some_and(|p| p.seq == ticket.seq);
        if !current {
            self.cache.record_stale_discard();
            log::debug!("discarding stale raster result for layer {:?}", ticket.layer);
            return TicketOutcome::Stale;
        }
        let pending = self.in_flight.remove(&ticket.layer);
        debug_assert_eq!(pending.map(|p| p.fingerprint), Some(ticket.fingerprint));

        if !ticket.visible {
            return TicketOutcome::Hidden;
        }
        let Some(map) = result else {
            log::warn!("raster job for layer {:?} ended without a result", ticket.layer);
            return TicketOutcome::Lost;
        };
        let buffer = self.store(ticket.layer, ticket.fingerprint, &map);
        surface.draw_over(&buffer);
        TicketOutcome::Painted
    }

    fn lookup(&mut self, layer: LayerId, fingerprint: Fingerprint) -> Option<Arc<PixelBuffer>> {
        let RenderConfig { cell_size, canvas_width, canvas_height, .. } = self.config;
        self.cache.get(layer, fingerprint, cell_size, canvas_width, canvas_height)
    }

    /// Paints `map` into a fresh transparent layer buffer and caches it.
    fn store(&mut self, layer: LayerId, fingerprint: Fingerprint, map: &GlyphMap) -> Arc<PixelBuffer> {
        let mut buffer = PixelBuffer::new(self.config.canvas_width, self.config.canvas_height);
        paint_glyph_map(&mut buffer, &mut self.fonts, map, self.config.cell_size);
        let buffer = Arc::new(buffer);
        self.cache.insert(layer, fingerprint, self.config.cell_size, Arc::clone(&buffer));
        buffer
    }
}
