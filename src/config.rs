use std::path::Path;
use std::time::Duration;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub site: SiteConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub static_dir: String,
    pub timeout_disabled: bool,
    pub request_timeout_secs: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub lookup_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub practice_name: String,
}

/// Account seeded into the in-memory session provider.
#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    pub enabled: bool,
    pub name: String,
    pub email: String,
}

impl ServerConfig {
    /// Request timeout. Disabling it uses a year-long timeout so the layer
    /// stack keeps one type.
    pub fn request_timeout(&self) -> Duration {
        if self.timeout_disabled {
            Duration::from_secs(365 * 24 * 60 * 60)
        } else {
            Duration::from_secs(u64::from(self.request_timeout_secs))
        }
    }
}

impl SessionConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.lookup_timeout_ms))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3000,
                host: "0.0.0.0".to_string(),
                static_dir: "static".to_string(),
                timeout_disabled: false,
                request_timeout_secs: 30,
            },
            session: SessionConfig {
                cookie_name: "practice_session".to_string(),
                lookup_timeout_ms: 2000,
            },
            site: SiteConfig {
                practice_name: "Doctor Mike".to_string(),
            },
            demo: DemoConfig {
                enabled: true,
                name: "Mike Johnson".to_string(),
                email: "doctor@example.com".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Layered load. Priority: CLI flag > CLI env var > `PORTAL_` env >
    /// config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.host", defaults.server.host)?
            .set_default("server.static_dir", defaults.server.static_dir)?
            .set_default("server.timeout_disabled", defaults.server.timeout_disabled)?
            .set_default(
                "server.request_timeout_secs",
                i64::from(defaults.server.request_timeout_secs),
            )?
            .set_default("session.cookie_name", defaults.session.cookie_name)?
            .set_default(
                "session.lookup_timeout_ms",
                i64::from(defaults.session.lookup_timeout_ms),
            )?
            .set_default("site.practice_name", defaults.site.practice_name)?
            .set_default("demo.enabled", defaults.demo.enabled)?
            .set_default("demo.name", defaults.demo.name)?
            .set_default("demo.email", defaults.demo.email)?;

        match &cli.config {
            Some(path) => builder = builder.add_source(File::with_name(path)),
            None if Path::new(CWD_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(CWD_CONFIG_FILE).required(false));
            }
            None => {}
        }

        // E.g. PORTAL_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("PORTAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("server.timeout_disabled", td)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
