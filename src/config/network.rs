//! Connection defaults for new networks.

use serde::{Deserialize, Serialize};

use super::defaults::{
    default_guest_ident, default_join, default_network_host, default_network_name,
    default_network_port,
};

/// Connection defaults applied to newly created networks.
///
/// Pre-populated so a freshly started instance has a usable connection
/// target out of the box. Identity fields may contain `{ergo_network}`-style
/// placeholders that the client expands per network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDefaults {
    /// Display name template for the network.
    #[serde(default = "default_network_name")]
    pub name: String,
    /// IRC server hostname (default: "127.0.0.1").
    #[serde(default = "default_network_host")]
    pub host: String,
    /// IRC server port (default: 6667).
    #[serde(default = "default_network_port")]
    pub port: u16,
    /// Server password (default: empty).
    #[serde(default)]
    pub password: String,
    /// Connect over TLS (default: false).
    #[serde(default)]
    pub tls: bool,
    /// Reject TLS certificates that fail validation (default: false).
    #[serde(default)]
    pub reject_unauthorized: bool,
    /// Default nickname.
    #[serde(default = "default_guest_ident")]
    pub nick: String,
    /// Default username.
    #[serde(default = "default_guest_ident")]
    pub username: String,
    /// Default realname.
    #[serde(default = "default_guest_ident")]
    pub realname: String,
    /// Comma-separated list of channels to join on connect (default: "#lobby").
    #[serde(default = "default_join")]
    pub join: String,
}

impl Default for NetworkDefaults {
    fn default() -> Self {
        Self {
            name: default_network_name(),
            host: default_network_host(),
            port: default_network_port(),
            password: String::new(),
            tls: false,
            reject_unauthorized: false,
            nick: default_guest_ident(),
            username: default_guest_ident(),
            realname: default_guest_ident(),
            join: default_join(),
        }
    }
}

impl NetworkDefaults {
    /// Channels from the `join` list, trimmed, empty entries dropped.
    pub fn join_channels(&self) -> impl Iterator<Item = &str> + '_ {
        self.join
            .split(',')
            .map(str::trim)
            .filter(|chan| !chan.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_defaults_point_at_localhost() {
        let cfg = NetworkDefaults::default();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 6667);
        assert_eq!(cfg.join, "#lobby");
        assert!(!cfg.tls);
        assert!(!cfg.reject_unauthorized);
        assert!(cfg.password.is_empty());
    }

    #[test]
    fn network_defaults_guest_identity() {
        let cfg = NetworkDefaults::default();
        assert_eq!(cfg.nick, "GuestUser");
        assert_eq!(cfg.username, "GuestUser");
        assert_eq!(cfg.realname, "GuestUser");
    }

    #[test]
    fn join_channels_splits_single_entry() {
        let cfg = NetworkDefaults::default();
        let channels: Vec<&str> = cfg.join_channels().collect();
        assert_eq!(channels, vec!["#lobby"]);
    }

    #[test]
    fn join_channels_splits_comma_list() {
        let cfg = NetworkDefaults {
            join: "#lobby, #help,,#dev ".to_string(),
            ..NetworkDefaults::default()
        };
        let channels: Vec<&str> = cfg.join_channels().collect();
        assert_eq!(channels, vec!["#lobby", "#help", "#dev"]);
    }

    #[test]
    fn network_defaults_deserialize_camel_case_keys() {
        let toml_str = r#"
            host = "irc.example.com"
            tls = true
            rejectUnauthorized = true
        "#;
        let cfg: NetworkDefaults = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.host, "irc.example.com");
        assert!(cfg.tls);
        assert!(cfg.reject_unauthorized);
        assert_eq!(cfg.port, 6667); // default
        assert_eq!(cfg.nick, "GuestUser"); // default
    }
}
