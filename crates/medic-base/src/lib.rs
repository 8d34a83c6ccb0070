//! Shared plumbing for the medic crates.
//!
//! Currently this is the logging layer: a `log` backend that writes either to
//! stdout or to date-named files, configured through [`LogConfig`].

pub mod logging;

pub use logging::{LogConfig, LogSink, init_logger, init_stdout_logger, parse_level};

// Re-export log so downstream crates can use medic_base::log::*
pub use log;
