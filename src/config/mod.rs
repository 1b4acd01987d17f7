// src/config/mod.rs
use std::{fs, io, path::{Path, PathBuf}};

use thiserror::Error;
use tracing::debug;

pub mod consts;
pub mod options;

use options::AppOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

/// Load options from TOML.
///
/// An explicit `path` must exist. Without one, `eci_scrape.toml` in the
/// working directory is used if present, otherwise defaults.
pub fn load(path: Option<&Path>) -> Result<AppOptions, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = PathBuf::from(consts::CONFIG_FILE);
            if !p.exists() {
                debug!("no {} found, using defaults", consts::CONFIG_FILE);
                return Ok(AppOptions::default());
            }
            p
        }
    };

    let text = fs::read_to_string(&path)
        .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
    let opts = parse(&text).map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
    debug!(path = %path.display(), "config loaded");
    Ok(opts)
}

pub fn parse(text: &str) -> Result<AppOptions, toml::de::Error> {
    toml::from_str(text)
}
