//! Directory-backed (LDAP) authentication settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults::{
    default_ldap_url, default_primary_key, default_root_dn, default_root_password,
    default_search_filter,
};

/// Directory-backed authentication settings.
///
/// The whole block is optional on the root config and absent by default;
/// the types exist so the schema documents the feature. Once the block is
/// present, `enable` still gates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdapConfig {
    /// Authenticate users against the directory (default: false).
    #[serde(default)]
    pub enable: bool,
    /// Directory server URL.
    #[serde(default = "default_ldap_url")]
    pub url: String,
    /// Extra TLS options passed through to the directory connection.
    #[serde(default)]
    pub tls_options: BTreeMap<String, String>,
    /// Attribute used as the account name (default: "uid").
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
    /// Search settings for account lookups.
    #[serde(default, rename = "searchDN")]
    pub search_dn: SearchDnConfig,
}

impl Default for LdapConfig {
    fn default() -> Self {
        Self {
            enable: false,
            url: default_ldap_url(),
            tls_options: BTreeMap::new(),
            primary_key: default_primary_key(),
            search_dn: SearchDnConfig::default(),
        }
    }
}

/// Directory search settings for account lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDnConfig {
    /// Base DN searches start from.
    #[serde(default = "default_root_dn", rename = "rootDN")]
    pub root_dn: String,
    /// Password for the search account.
    #[serde(default = "default_root_password")]
    pub root_password: String,
    /// Search filter; `%uid` is replaced with the login name.
    #[serde(default = "default_search_filter")]
    pub filter: String,
}

impl Default for SearchDnConfig {
    fn default() -> Self {
        Self {
            root_dn: default_root_dn(),
            root_password: default_root_password(),
            filter: default_search_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ldap_block_disabled_by_default() {
        let cfg = LdapConfig::default();
        assert!(!cfg.enable);
        assert!(cfg.tls_options.is_empty());
        assert_eq!(cfg.url, "ldaps://example.com");
        assert_eq!(cfg.primary_key, "uid");
    }

    #[test]
    fn search_dn_template_values() {
        let cfg = SearchDnConfig::default();
        assert_eq!(cfg.root_dn, "ou=accounts,dc=example,dc=com");
        assert_eq!(cfg.filter, "(&(objectClass=account)(uid=%uid))");
    }

    #[test]
    fn ldap_deserialize_wire_names() {
        let toml_str = r#"
            enable = true
            url = "ldaps://directory.internal"
            primaryKey = "cn"

            [searchDN]
            rootDN = "ou=people,dc=internal"
            rootPassword = "hunter2"
        "#;
        let cfg: LdapConfig = toml::from_str(toml_str).unwrap();
        assert!(cfg.enable);
        assert_eq!(cfg.url, "ldaps://directory.internal");
        assert_eq!(cfg.primary_key, "cn");
        assert_eq!(cfg.search_dn.root_dn, "ou=people,dc=internal");
        assert_eq!(cfg.search_dn.root_password, "hunter2");
        // filter keeps its default when not overridden
        assert_eq!(cfg.search_dn.filter, "(&(objectClass=account)(uid=%uid))");
    }
}
