//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Root config struct, loading and serialization (Config, DebugConfig)
//! - [`https`]: HTTPS listener settings (HttpsConfig)
//! - [`upload`]: File upload settings (FileUploadConfig)
//! - [`network`]: Connection defaults for new networks (NetworkDefaults)
//! - [`storage`]: Transport and message storage backends (Transport, StorageBackend)
//! - [`identd`]: Built-in identd responder settings (IdentdConfig)
//! - [`ldap`]: Directory-backed authentication (LdapConfig, SearchDnConfig)
//! - [`validation`]: Startup validation of a loaded configuration

mod defaults;
mod https;
mod identd;
mod ldap;
mod network;
mod storage;
mod types;
mod upload;
pub mod validation;

pub use https::HttpsConfig;
pub use identd::IdentdConfig;
pub use ldap::{LdapConfig, SearchDnConfig};
pub use network::NetworkDefaults;
pub use storage::{StorageBackend, Transport};
pub use types::{Config, ConfigError, DebugConfig};
pub use validation::{ValidationError, validate};
