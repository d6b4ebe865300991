//! Core configuration types, loading and serialization.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::defaults::{
    default_host, default_leave_message, default_max_history, default_message_storage,
    default_port, default_prefetch_max_image_size, default_prefetch_max_search_size,
    default_prefetch_timeout, default_theme, default_transports, default_true,
};
use super::https::HttpsConfig;
use super::identd::IdentdConfig;
use super::ldap::LdapConfig;
use super::network::NetworkDefaults;
use super::storage::{StorageBackend, Transport};
use super::upload::FileUploadConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to parse config: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("failed to serialize config: {0}")]
    Emit(#[from] toml::ser::Error),
}

/// Server configuration.
///
/// Every field carries a default, so an empty file (or no file at all)
/// yields a complete, usable configuration. Keys absent from a user file
/// keep their default; keys present replace the default wholesale, lists
/// and tables included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Whether the instance is open to anonymous visitors (default: true).
    #[serde(default = "default_true")]
    pub public: bool,
    /// Address the web server listens on (default: "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the web server listens on (default: 9000).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Network interface outgoing IRC connections are bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Whether the server runs behind a reverse proxy; affects how client
    /// addresses are determined (default: true).
    #[serde(default = "default_true")]
    pub reverse_proxy: bool,
    /// Number of messages kept in memory per channel (default: 10000).
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// Name of the client theme (default: "default").
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Fetch previews for links pasted into chat (default: false).
    #[serde(default)]
    pub prefetch: bool,
    /// Keep a local copy of prefetched images (default: false).
    #[serde(default)]
    pub prefetch_storage: bool,
    /// Largest image that will be prefetched, in kilobytes (default: 2048).
    #[serde(default = "default_prefetch_max_image_size")]
    pub prefetch_max_image_size: u64,
    /// How much of a page is downloaded when looking for a preview, in
    /// kilobytes (default: 50).
    #[serde(default = "default_prefetch_max_search_size")]
    pub prefetch_max_search_size: u64,
    /// Prefetch request timeout in milliseconds (default: 5000).
    #[serde(default = "default_prefetch_timeout")]
    pub prefetch_timeout: u64,
    /// Message sent to channels when closing them.
    #[serde(default = "default_leave_message")]
    pub leave_message: String,
    /// Show network settings on the connect screen (default: true).
    #[serde(default = "default_true")]
    pub display_network: bool,
    /// Prevent users from editing network settings (default: false).
    #[serde(default)]
    pub lock_network: bool,
    /// Display user IPs as hexadecimal (default: false).
    #[serde(default)]
    pub use_hex_ip: bool,
    /// Path to an oidentd spoof file; enables oidentd support when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oidentd: Option<String>,
    /// Client-server transports, tried in order
    /// (default: ["polling", "websocket"]).
    #[serde(default = "default_transports")]
    pub transports: Vec<Transport>,
    /// Message storage backends, in order of preference
    /// (default: ["sqlite", "text"]).
    #[serde(default = "default_message_storage")]
    pub message_storage: Vec<StorageBackend>,
    /// HTTPS settings for the built-in web server.
    #[serde(default)]
    pub https: HttpsConfig,
    /// File upload settings.
    #[serde(default)]
    pub file_upload: FileUploadConfig,
    /// Connection defaults for new networks.
    #[serde(default)]
    pub defaults: NetworkDefaults,
    /// WEBIRC gateway passwords, keyed by IRC server hostname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webirc: Option<BTreeMap<String, String>>,
    /// Built-in identd responder settings.
    #[serde(default)]
    pub identd: IdentdConfig,
    /// Directory-backed authentication; absent unless configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap: Option<LdapConfig>,
    /// Debug logging toggles.
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public: true,
            host: default_host(),
            port: default_port(),
            bind: None,
            reverse_proxy: true,
            max_history: default_max_history(),
            theme: default_theme(),
            prefetch: false,
            prefetch_storage: false,
            prefetch_max_image_size: default_prefetch_max_image_size(),
            prefetch_max_search_size: default_prefetch_max_search_size(),
            prefetch_timeout: default_prefetch_timeout(),
            leave_message: default_leave_message(),
            display_network: true,
            lock_network: false,
            use_hex_ip: false,
            oidentd: None,
            transports: default_transports(),
            message_storage: default_message_storage(),
            https: HttpsConfig::default(),
            file_upload: FileUploadConfig::default(),
            defaults: NetworkDefaults::default(),
            webirc: None,
            identd: IdentdConfig::default(),
            ldap: None,
            debug: DebugConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    ///
    /// TOML is the native format; files ending in `.json` are parsed as
    /// JSON instead. Keys absent from the file keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    /// Load configuration from a file, falling back to the built-in
    /// defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using built-in defaults"
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Serialize the configuration to TOML.
    ///
    /// Unset optional fields are omitted; parsing the output yields a
    /// configuration equal to `self`.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Debug logging toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugConfig {
    /// Log events from the IRC connection layer (default: false).
    #[serde(default)]
    pub irc_framework: bool,
    /// Log raw IRC traffic for every connection (default: false).
    #[serde(default)]
    pub raw: bool,
}
