//! Logger setup for sample programs.
//!
//! Everything logs through the `log` facade; `env_logger` is the only backend.

mod init;

pub use init::{init_logging, LoggingConfig};
