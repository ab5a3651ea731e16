//! Layered application configuration.
//!
//! Sources, lowest to highest precedence:
//! 1) built-in defaults -> 2) YAML file -> 3) env (`APP__*`, `__` nests) -> 4) CLI overrides

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tenant_router::TenantRouterConfig;

/// Prefix for environment overrides, e.g. `APP__SERVER__PORT=9090`.
pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub tenant_router: TenantRouterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Reported in startup logs.
    pub app_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            app_name: "tenant-router".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `info` or `tenant_router=debug,info`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then `APP__` env vars.
    ///
    /// # Errors
    /// Returns an error if a source cannot be parsed or a value has the wrong shape.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) {
        if let Some(port) = port {
            self.server.port = port;
        }
        match verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to render configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::time::Duration;
    use tenant_router::config::StorageConfig;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let cfg = AppConfig::load(None).unwrap();
            assert_eq!(cfg.server.port, 8080);
            assert_eq!(cfg.logging.level, "info");
            assert_eq!(cfg.tenant_router.forward_timeout, Duration::from_secs(10));
            assert_eq!(cfg.tenant_router.storage, StorageConfig::Memory);
            Ok(())
        });
    }

    #[test]
    fn test_yaml_then_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
server:
  port: 9000
logging:
  format: json
tenant_router:
  forward_timeout: 2s
  storage:
    kind: database
    dsn: "sqlite://tenants.db?mode=rwc"
"#,
            )?;
            jail.set_env("APP__SERVER__PORT", "9100");

            let cfg = AppConfig::load(Some(Path::new("config.yaml"))).unwrap();

            assert_eq!(cfg.server.port, 9100);
            assert_eq!(cfg.logging.format, LogFormat::Json);
            assert_eq!(cfg.tenant_router.forward_timeout, Duration::from_secs(2));
            assert_eq!(
                cfg.tenant_router.storage,
                StorageConfig::Database {
                    dsn: "sqlite://tenants.db?mode=rwc".to_owned()
                }
            );
            Ok(())
        });
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "server:\n  bogus: true\n")?;

            assert!(AppConfig::load(Some(Path::new("config.yaml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut cfg = AppConfig::default();

        cfg.apply_cli_overrides(Some(7000), 2);

        assert_eq!(cfg.server.port, 7000);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.bind_addr(), "127.0.0.1:7000");
    }
}
