//! parlour - configuration tool for a self-hosted web IRC client server.
//!
//! `parlour [path]` checks a configuration file (built-in defaults are used
//! when the file does not exist); `parlour init [path]` writes the default
//! configuration to disk.

use std::path::Path;

use parlour::config::{Config, validate};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Directory authentication template, kept inert until uncommented.
const LDAP_TEMPLATE: &str = r#"
# Directory-backed authentication. Uncomment and fill in to enable.
#
# [ldap]
# enable = true
# url = "ldaps://example.com"
# primaryKey = "uid"
#
# [ldap.searchDN]
# rootDN = "ou=accounts,dc=example,dc=com"
# rootPassword = "1234"
# filter = "(&(objectClass=account)(uid=%uid))"
"#;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let first = args.next();
    match first.as_deref() {
        Some("init") => init(&args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())),
        Some("check") => check(&args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())),
        Some(path) => check(path),
        None => check(DEFAULT_CONFIG_PATH),
    }
}

/// Load and validate a configuration file, logging the effective settings.
fn check(path: &str) -> anyhow::Result<()> {
    let config = Config::load_or_default(path).map_err(|e| {
        error!(path = %path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = validate(&config) {
        for err in &errors {
            error!(error = %err, "Invalid configuration");
        }
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }

    info!(
        host = %config.host,
        port = config.port,
        public = config.public,
        reverse_proxy = config.reverse_proxy,
        theme = %config.theme,
        "Configuration OK"
    );
    info!(
        transports = ?config.transports,
        storage = ?config.message_storage,
        max_history = config.max_history,
        "Client settings"
    );
    info!(
        host = %config.defaults.host,
        port = config.defaults.port,
        join = %config.defaults.join,
        "Default network"
    );

    Ok(())
}

/// Write the default configuration to `path`, refusing to overwrite.
fn init(path: &str) -> anyhow::Result<()> {
    if Path::new(path).exists() {
        anyhow::bail!("refusing to overwrite existing config: {path}");
    }

    let mut rendered = Config::default().to_toml()?;
    rendered.push_str(LDAP_TEMPLATE);
    std::fs::write(path, rendered)?;

    info!(path = %path, "Wrote default configuration");
    Ok(())
}
