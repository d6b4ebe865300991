//! Transport and message storage backend selection.

use serde::{Deserialize, Serialize};

/// Client-server transport mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// HTTP long-polling. Works everywhere, including behind restrictive
    /// proxies that strip upgrade headers.
    Polling,
    /// Persistent WebSocket connection.
    Websocket,
}

impl Transport {
    /// Get the wire name of this transport.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polling => "polling",
            Self::Websocket => "websocket",
        }
    }
}

/// Message storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Structured storage in a SQLite database.
    Sqlite,
    /// Flat text log files, one per channel.
    Text,
}

impl StorageBackend {
    /// Get the wire name of this backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Text => "text",
        }
    }
}
