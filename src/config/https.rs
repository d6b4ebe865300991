//! HTTPS listener settings.

use serde::{Deserialize, Serialize};

/// HTTPS settings for the built-in web server.
///
/// Disabled by default; key and certificate paths must both be set for the
/// listener to come up with TLS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpsConfig {
    /// Serve the client over TLS (default: false).
    #[serde(default)]
    pub enable: bool,
    /// Path to the private key file (PEM format).
    #[serde(default)]
    pub key: String,
    /// Path to the certificate file (PEM format).
    #[serde(default)]
    pub certificate: String,
    /// Path to an optional CA bundle (PEM format).
    #[serde(default)]
    pub ca: String,
}
