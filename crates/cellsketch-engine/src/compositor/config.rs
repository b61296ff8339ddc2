use std::fmt;

use crate::paint::Color;

/// Compositor configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Pixels per grid cell, both axes.
    pub cell_size: u32,

    /// Canvas (and cached layer buffer) size in pixels.
    pub canvas_width: u32,
    pub canvas_height: u32,

    /// Color `render_frame` clears the surface to before painting layers.
    pub background: Color,

    /// Rasterization worker count.
    ///
    /// `None` uses rayon's default (one per core); `Some(0)` rasterizes
    /// inline on the calling thread.
    pub worker_threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: 16,
            canvas_width: 1280,
            canvas_height: 720,
            background: Color::transparent(),
            worker_threads: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        Ok(())
    }
}

/// Rejected [`RenderConfig`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroCellSize,
    EmptyCanvas { width: u32, height: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCellSize => write!(f, "cell size must be at least 1 pixel"),
            Self::EmptyCanvas { width, height } => {
                write!(f, "canvas must be non-empty, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
