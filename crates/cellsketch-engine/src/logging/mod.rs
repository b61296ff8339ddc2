//! Logging setup.
//!
//! The engine logs through the `log` facade only; binaries pick the backend.
//! `init_logging` wires up `env_logger` for the studio and tests; the
//! `CELLSKETCH_LOG` variable overrides the configured filter.

mod init;

pub use init::{init_logging, LoggingConfig, LOG_ENV};
