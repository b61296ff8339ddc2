use std::fmt;

use super::config::ConfigError;

/// Failure to construct a [`Compositor`](super::Compositor).
///
/// Painting itself never fails; malformed elements are skipped and logged.
#[derive(Debug)]
pub enum RenderError {
    Config(ConfigError),
    /// The rasterization thread pool could not be started.
    ThreadPool(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid render config: {e}"),
            Self::ThreadPool(msg) => write!(f, "failed to start raster workers: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::ThreadPool(_) => None,
        }
    }
}

impl From<ConfigError> for RenderError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for RenderError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(e.to_string())
    }
}
