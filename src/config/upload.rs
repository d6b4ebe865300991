//! File upload settings.

use serde::{Deserialize, Serialize};

use super::defaults::default_max_file_size;

/// File upload settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadConfig {
    /// Allow clients to upload files (default: false).
    #[serde(default)]
    pub enable: bool,
    /// Maximum accepted upload size, in kilobytes (default: 10240).
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// External base URL uploads are served from. When unset, uploads are
    /// served from the client's own origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for FileUploadConfig {
    fn default() -> Self {
        Self {
            enable: false,
            max_file_size: default_max_file_size(),
            base_url: None,
        }
    }
}

impl FileUploadConfig {
    /// Maximum accepted upload size in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size * 1024
    }
}
