//! Built-in identd responder settings.

use serde::{Deserialize, Serialize};

use super::defaults::default_identd_port;

/// Settings for the built-in identd responder.
///
/// When enabled, ident queries from IRC servers are answered with the
/// username of the connected user. Requires the ident port to be reachable
/// from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentdConfig {
    /// Answer ident queries (default: false).
    #[serde(default)]
    pub enable: bool,
    /// Port to listen on for ident queries (default: 113).
    #[serde(default = "default_identd_port")]
    pub port: u16,
}

impl Default for IdentdConfig {
    fn default() -> Self {
        Self {
            enable: false,
            port: default_identd_port(),
        }
    }
}
