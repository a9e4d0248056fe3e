//! CLI settings: built-in defaults + optional TOML config.
//!
//! - `--config FILE` wins; otherwise ~/.sha256/config.toml if present
//! - `SHA256_CHUNK_SIZE` overrides `chunk_size` from either source

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
/// Upper bound for `chunk_size`; the read buffer is allocated up front.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Bytes read from the input per `absorb` call.
    pub chunk_size: usize,
    /// Same as SHA256_DEBUG=1.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config { chunk_size: DEFAULT_CHUNK_SIZE, debug: false }
    }
}

impl Config {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(txt).context("parsing config")?;
        cfg.validated()
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("in {}", path.display()))
    }

    fn validated(self) -> Result<Self> {
        if self.chunk_size == 0 {
            bail!("chunk_size must be greater than zero");
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            bail!("chunk_size {} exceeds the maximum of {} bytes", self.chunk_size, MAX_CHUNK_SIZE);
        }
        Ok(self)
    }

    /// Apply SHA256_CHUNK_SIZE when set.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(raw) = std::env::var("SHA256_CHUNK_SIZE") {
            self.chunk_size = raw
                .trim()
                .parse()
                .with_context(|| format!("SHA256_CHUNK_SIZE is not a byte count: {raw:?}"))?;
        }
        self.validated()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.sha256/config.toml (home dir resolved per platform)
    dirs_next::home_dir().map(|h| h.join(".sha256").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Load settings. An explicit `--config` must exist; the default path is optional.
pub fn load(cli_path: &Option<PathBuf>) -> Result<Config> {
    let cfg = match (cli_path, resolve_config_path(cli_path)) {
        (Some(_), Some(p)) => Config::from_toml_file(&p)?,
        (None, Some(p)) if p.exists() => Config::from_toml_file(&p)?,
        _ => Config::default(),
    };
    cfg.with_env_overrides()
}
