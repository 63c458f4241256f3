//! Logger bootstrap for engine binaries.
//!
//! The library itself only uses the `log` facade; this module wires up the
//! `env_logger` backend once, early in `main`.

mod init;

pub use init::{LoggingConfig, init_logging};
