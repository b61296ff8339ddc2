use std::sync::OnceLock;

use log::LevelFilter;

/// Environment variable that overrides [`LoggingConfig::filter_string`].
pub const LOG_ENV: &str = "CELLSKETCH_LOG";

/// Logger configuration.
///
/// The effective filter is `level` followed by `directives`, each an
/// `env_logger` directive such as `cellsketch_engine::cache=trace`. Setting
/// [`LOG_ENV`] replaces the whole filter.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub directives: Vec<String>,
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with their module path instead of the crate target.
    pub module_path: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            directives: Vec::new(),
            write_style: env_logger::WriteStyle::Auto,
            module_path: false,
        }
    }
}

impl LoggingConfig {
    /// Adds a per-target directive, e.g. `cellsketch_engine::compositor=debug`.
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// Filter string handed to `env_logger` when [`LOG_ENV`] is unset.
    pub fn filter_string(&self) -> String {
        let mut filter = self.level.as_str().to_ascii_lowercase();
        for d in self.directives.iter().map(|d| d.trim()).filter(|d| !d.is_empty()) {
            filter.push(',');
            filter.push_str(d);
        }
        filter
    }
}

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Installs `env_logger` as the global logger.
///
/// The first call decides; later calls return the same answer without
/// touching the logger. Returns `false` when another logger was already
/// registered, in which case records go to that one.
pub fn init_logging(config: LoggingConfig) -> bool {
    *INSTALLED.get_or_init(|| {
        let env = env_logger::Env::new().filter_or(LOG_ENV, config.filter_string());
        let installed = env_logger::Builder::from_env(env)
            .write_style(config.write_style)
            .format_module_path(config.module_path)
            .format_target(!config.module_path)
            .try_init()
            .is_ok();
        if installed {
            log::debug!("logger installed ({LOG_ENV} or \"{}\")", config.filter_string());
        }
        installed
    })
}
