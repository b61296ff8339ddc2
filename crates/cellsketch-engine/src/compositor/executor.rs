use rayon::prelude::*;

use crate::raster::{rasterize_layer, GlyphMap};
use crate::scene::Layer;

use super::RenderError;

/// Runs rasterization work for the compositor.
///
/// Rasterization is pure, so implementations are free to run it anywhere.
/// Results of `rasterize_all` must come back in input order.
pub trait RasterExecutor: Send + Sync {
    /// Rasterizes every layer and waits for all results.
    fn rasterize_all(&self, layers: &[&Layer]) -> Vec<GlyphMap>;

    /// Runs `job` in the background (or immediately, for inline executors).
    fn spawn(&self, job: Box<dyn FnOnce() + Send + 'static>);
}

/// Rasterizes on the calling thread. Deterministic; used by tests and
/// `worker_threads: Some(0)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl RasterExecutor for InlineExecutor {
    fn rasterize_all(&self, layers: &[&Layer]) -> Vec<GlyphMap> {
        layers.iter().map(|l| rasterize_layer(l)).collect()
    }

    fn spawn(&self, job: Box<dyn FnOnce() + Send + 'static>) {
        job();
    }
}

/// Rasterizes on a dedicated rayon pool.
pub struct PoolExecutor {
    pool: rayon::ThreadPool,
}

impl PoolExecutor {
    /// `threads: None` lets rayon pick one worker per core.
    pub fn new(threads: Option<usize>) -> Result<Self, RenderError> {
        let mut builder = rayon::ThreadPoolBuilder::new()
            .thread_name(|i| format!("cellsketch-raster-{i}"))
            // A panicking spawned job drops its result sender; the ticket
            // then completes as lost instead of aborting the process.
            .panic_handler(|payload| {
                let msg = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "non-string panic".to_string());
                log::error!("raster job panicked: {msg}");
            });
        if let Some(n) = threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build()?;
        log::debug!("raster pool started with {} workers", pool.current_num_threads());
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl RasterExecutor for PoolExecutor {
    fn rasterize_all(&self, layers: &[&Layer]) -> Vec<GlyphMap> {
        self.pool.install(|| layers.par_iter().map(|l| rasterize_layer(l)).collect())
    }

    fn spawn(&self, job: Box<dyn FnOnce() + Send + 'static>) {
        self.pool.spawn(job);
    }
}
