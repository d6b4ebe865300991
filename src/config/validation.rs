//! Configuration validation.
//!
//! Validates a loaded configuration at startup to catch common errors early.

use std::path::Path;

use thiserror::Error;

use super::Config;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("host must not be empty")]
    MissingHost,
    #[error("port must not be 0")]
    InvalidPort,
    #[error("theme must not be empty")]
    MissingTheme,
    #[error("transports must not be empty")]
    NoTransports,
    #[error("https.key is required when https is enabled")]
    HttpsKeyMissing,
    #[error("https.certificate is required when https is enabled")]
    HttpsCertificateMissing,
    #[error("https.key does not exist: {0}")]
    HttpsKeyNotFound(String),
    #[error("https.certificate does not exist: {0}")]
    HttpsCertificateNotFound(String),
    #[error("https.ca does not exist: {0}")]
    HttpsCaNotFound(String),
    #[error("fileUpload.maxFileSize must not be 0 when uploads are enabled")]
    InvalidMaxFileSize,
    #[error("prefetchTimeout must not be 0 when prefetch is enabled")]
    InvalidPrefetchTimeout,
    #[error("identd.port must not be 0 when identd is enabled")]
    InvalidIdentdPort,
    #[error("defaults.port must not be 0")]
    InvalidNetworkPort,
    #[error("invalid channel name in defaults.join: '{0}'")]
    InvalidChannelName(String),
    #[error("ldap.url is required when ldap is enabled")]
    LdapUrlMissing,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Web server
    if config.host.is_empty() {
        errors.push(ValidationError::MissingHost);
    }
    if config.port == 0 {
        errors.push(ValidationError::InvalidPort);
    }
    if config.theme.is_empty() {
        errors.push(ValidationError::MissingTheme);
    }
    if config.transports.is_empty() {
        errors.push(ValidationError::NoTransports);
    }

    // HTTPS: both key and certificate are needed, and must exist on disk
    if config.https.enable {
        if config.https.key.is_empty() {
            errors.push(ValidationError::HttpsKeyMissing);
        } else if !Path::new(&config.https.key).exists() {
            errors.push(ValidationError::HttpsKeyNotFound(config.https.key.clone()));
        }
        if config.https.certificate.is_empty() {
            errors.push(ValidationError::HttpsCertificateMissing);
        } else if !Path::new(&config.https.certificate).exists() {
            errors.push(ValidationError::HttpsCertificateNotFound(
                config.https.certificate.clone(),
            ));
        }
        if !config.https.ca.is_empty() && !Path::new(&config.https.ca).exists() {
            errors.push(ValidationError::HttpsCaNotFound(config.https.ca.clone()));
        }
    }

    // Prefetch and upload limits
    if config.file_upload.enable && config.file_upload.max_file_size == 0 {
        errors.push(ValidationError::InvalidMaxFileSize);
    }
    if config.prefetch && config.prefetch_timeout == 0 {
        errors.push(ValidationError::InvalidPrefetchTimeout);
    }

    // Identd
    if config.identd.enable && config.identd.port == 0 {
        errors.push(ValidationError::InvalidIdentdPort);
    }

    // Network defaults
    if config.defaults.port == 0 {
        errors.push(ValidationError::InvalidNetworkPort);
    }
    for channel in config.defaults.join_channels() {
        if !channel.starts_with('#') && !channel.starts_with('&') {
            errors.push(ValidationError::InvalidChannelName(channel.to_string()));
        }
    }

    // Directory authentication
    if let Some(ref ldap) = config.ldap
        && ldap.enable
        && ldap.url.is_empty()
    {
        errors.push(ValidationError::LdapUrlMissing);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LdapConfig, NetworkDefaults};

    #[test]
    fn default_config_passes() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn empty_host_fails() {
        let config = Config {
            host: String::new(),
            ..Config::default()
        };
        let errors = validate(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::MissingHost))
        );
    }

    #[test]
    fn zero_port_fails() {
        let config = Config {
            port: 0,
            ..Config::default()
        };
        let errors = validate(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::InvalidPort))
        );
    }

    #[test]
    fn empty_transports_fails() {
        let config = Config {
            transports: Vec::new(),
            ..Config::default()
        };
        let errors = validate(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::NoTransports))
        );
    }

    #[test]
    fn https_enabled_without_key_material_fails() {
        let toml_str = r#"
            [https]
            enable = true
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::HttpsKeyMissing))
        );
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::HttpsCertificateMissing))
        );
    }

    #[test]
    fn https_enabled_with_missing_files_fails() {
        let toml_str = r#"
            [https]
            enable = true
            key = "/nonexistent/key.pem"
            certificate = "/nonexistent/cert.pem"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::HttpsKeyNotFound(_)))
        );
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::HttpsCertificateNotFound(_)))
        );
    }

    #[test]
    fn upload_enabled_with_zero_limit_fails() {
        let toml_str = r#"
            [fileUpload]
            enable = true
            maxFileSize = 0
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::InvalidMaxFileSize))
        );
    }

    #[test]
    fn bad_join_channel_fails() {
        let config = Config {
            defaults: NetworkDefaults {
                join: "#lobby,lobby".to_string(),
                ..NetworkDefaults::default()
            },
            ..Config::default()
        };
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ValidationError::InvalidChannelName(name) if name == "lobby")
        ));
    }

    #[test]
    fn ampersand_channels_accepted() {
        let config = Config {
            defaults: NetworkDefaults {
                join: "&local,#lobby".to_string(),
                ..NetworkDefaults::default()
            },
            ..Config::default()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn enabled_ldap_without_url_fails() {
        let config = Config {
            ldap: Some(LdapConfig {
                enable: true,
                url: String::new(),
                ..LdapConfig::default()
            }),
            ..Config::default()
        };
        let errors = validate(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::LdapUrlMissing))
        );
    }

    #[test]
    fn disabled_ldap_block_is_not_validated() {
        let config = Config {
            ldap: Some(LdapConfig {
                enable: false,
                url: String::new(),
                ..LdapConfig::default()
            }),
            ..Config::default()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn errors_are_collected_not_short_circuited() {
        let config = Config {
            host: String::new(),
            port: 0,
            theme: String::new(),
            ..Config::default()
        };
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
