//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use super::storage::{StorageBackend, Transport};

/// Returns `true` (for serde defaults).
pub fn default_true() -> bool {
    true
}

// =============================================================================
// Web Server Defaults
// =============================================================================

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    9000
}

pub fn default_max_history() -> usize {
    10000
}

pub fn default_theme() -> String {
    "default".to_string()
}

pub fn default_leave_message() -> String {
    "The Lounge - https://thelounge.chat".to_string()
}

// =============================================================================
// Prefetch Defaults
// =============================================================================

pub fn default_prefetch_max_image_size() -> u64 {
    2048
}

pub fn default_prefetch_max_search_size() -> u64 {
    50
}

pub fn default_prefetch_timeout() -> u64 {
    5000
}

// =============================================================================
// Transport and Storage Defaults
// =============================================================================

pub fn default_transports() -> Vec<Transport> {
    vec![Transport::Polling, Transport::Websocket]
}

pub fn default_message_storage() -> Vec<StorageBackend> {
    vec![StorageBackend::Sqlite, StorageBackend::Text]
}

// =============================================================================
// File Upload Defaults
// =============================================================================

pub fn default_max_file_size() -> u64 {
    10240
}

// =============================================================================
// Network Defaults
// =============================================================================

pub fn default_network_name() -> String {
    "{ergo_network}".to_string()
}

pub fn default_network_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_network_port() -> u16 {
    6667
}

pub fn default_guest_ident() -> String {
    "GuestUser".to_string()
}

pub fn default_join() -> String {
    "#lobby".to_string()
}

// =============================================================================
// Identd Defaults
// =============================================================================

pub fn default_identd_port() -> u16 {
    113
}

// =============================================================================
// Directory (LDAP) Defaults
// =============================================================================

pub fn default_ldap_url() -> String {
    "ldaps://example.com".to_string()
}

pub fn default_primary_key() -> String {
    "uid".to_string()
}

pub fn default_root_dn() -> String {
    "ou=accounts,dc=example,dc=com".to_string()
}

pub fn default_root_password() -> String {
    "1234".to_string()
}

pub fn default_search_filter() -> String {
    "(&(objectClass=account)(uid=%uid))".to_string()
}
