//! Logging utilities.
//!
//! Everything logs through the `log` facade; this module only decides which
//! backend receives the records and with what filter.

mod init;

pub use init::{init_logging, LoggingConfig};
