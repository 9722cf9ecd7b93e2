//! Runtime configuration.
//!
//! Defaults match the server's built-in constants. A YAML file named by
//! `DOCROOT_CONFIG` may override them, and `LISTEN` overrides the bind
//! address last.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Env var naming an optional YAML config file.
pub const CONFIG_ENV: &str = "DOCROOT_CONFIG";
/// Env var overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Upper bound for the single read of a request.
    #[serde(default = "default_buffer_size")]
    pub max_request_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticConfig {
    /// Document root every URI is appended to.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Size of each file read while streaming a body.
    #[serde(default = "default_buffer_size")]
    pub chunk_size: usize,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from("./www")
}

fn default_buffer_size() -> usize {
    1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            max_request_bytes: default_buffer_size(),
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            chunk_size: default_buffer_size(),
        }
    }
}

impl Config {
    /// Builds the config from defaults, the optional YAML file and `LISTEN`.
    pub fn load() -> Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = addr;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.max_request_bytes == 0 {
            anyhow::bail!("server.max_request_bytes must be greater than zero");
        }
        if self.static_files.chunk_size == 0 {
            anyhow::bail!("static_files.chunk_size must be greater than zero");
        }
        Ok(())
    }
}
