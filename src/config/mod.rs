// Configuration module entry point
// Layered loading: optional config file, environment, programmatic defaults

mod types;

pub use types::{Config, HealthConfig, LoggingConfig, ServerConfig, StaticFilesConfig};

use std::net::SocketAddr;

impl Config {
    /// Load configuration from the default "config.toml" location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    ///
    /// The file is optional; `SERVER_*` environment variables layer on top,
    /// and the hosting platform's `PORT` variable wins over everything.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("static_files.root", "public")?
            .set_default("static_files.index_file", "index.html")?
            .set_default("health.enabled", true)?
            .set_default("health.path", "/api/health")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        if let Ok(raw) = std::env::var("PORT") {
            cfg.server.port = raw.parse().map_err(|e| {
                config::ConfigError::Message(format!("Invalid PORT value '{raw}': {e}"))
            })?;
        }

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Defaults and the PORT override share one test body: both touch the
    // process environment, and #[test] functions run in parallel.
    #[test]
    fn defaults_and_port_override() {
        std::env::remove_var("PORT");
        let cfg = Config::load_from("missing-test-config").expect("defaults load");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.static_files.root, "public");
        assert_eq!(cfg.static_files.index_file, "index.html");
        assert!(cfg.health.enabled);
        assert_eq!(cfg.health.path, "/api/health");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "common");

        std::env::set_var("PORT", "4711");
        let cfg = Config::load_from("missing-test-config").expect("load with PORT");
        assert_eq!(cfg.server.port, 4711);

        std::env::set_var("PORT", "not-a-port");
        assert!(Config::load_from("missing-test-config").is_err());

        std::env::remove_var("PORT");
    }

    #[test]
    fn socket_addr_parses() {
        let cfg = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
            },
            static_files: StaticFilesConfig {
                root: "public".to_string(),
                index_file: "index.html".to_string(),
            },
            health: HealthConfig::default(),
            logging: LoggingConfig {
                access_log: false,
                access_log_format: "common".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
        };
        let addr = cfg.socket_addr().expect("valid address");
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }
}
