//! Host settings from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Where the static host listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Static markup, served at `/`.
    pub website_dir: PathBuf,
    /// wasm-pack output for the `client` crate, served at `/pkg`.
    pub pkg_dir: PathBuf,
}

impl SiteConfig {
    /// Read `PORT`, `WEBSITE_DIR` and `PKG_DIR`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let website_dir = lookup("WEBSITE_DIR").map_or_else(|| manifest_dir.join("website"), PathBuf::from);
        let pkg_dir = lookup("PKG_DIR").map_or_else(|| manifest_dir.join("target/site/pkg"), PathBuf::from);
        Ok(Self { port, website_dir, pkg_dir })
    }
}
