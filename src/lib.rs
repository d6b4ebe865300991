//! parlour - configuration core for a self-hosted web IRC client server.
//!
//! The crate owns the full configuration surface of the server: the default
//! record, file loading with default-merging, startup validation, and
//! serialization. Every key left out of a user file keeps its built-in
//! default, so a server can start with no configuration file at all.

pub mod config;

pub use config::{Config, ConfigError};
