//! Configuration loading, validation, and CLI overrides.
//!
//! [`parse_config_str`] deserializes a config document by file
//! extension (YAML, JSON, TOML, each behind a feature flag),
//! [`load_file`] reads and validates a file, [`resolve`] picks the file
//! to use (explicit path, auto-detected, or built-in defaults), and
//! [`apply_overrides`] layers CLI/env values on top.

pub mod model;
pub mod validation;

use std::path::{Path, PathBuf};

use crate::error::ProxyError;
use model::ProxyConfig;

/// File names probed in the working directory when no `--config` is given.
pub const CANDIDATES: &[&str] = &[
    "m3-proxy.yaml",
    "m3-proxy.yml",
    "m3-proxy.json",
    "m3-proxy.toml",
];

/// Parse a config string based on file extension.
pub fn parse_config_str(
    ext: &str,
    content: &str,
    path_display: &str,
) -> Result<ProxyConfig, ProxyError> {
    match ext {
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => serde_yml::from_str(content).map_err(|e| ProxyError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "json")]
        "json" => serde_json::from_str(content).map_err(|e| ProxyError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "toml")]
        "toml" => toml::from_str(content).map_err(|e| ProxyError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        other => Err(ProxyError::UnsupportedFormat(other.to_string())),
    }
}

/// Read, parse, and validate a config file.
pub async fn load_file(path: &Path) -> Result<ProxyConfig, ProxyError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProxyError::ConfigFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProxyError::Io(e)
        }
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let config = parse_config_str(ext, &content, &path.display().to_string())?;

    validation::validate(&config).map_err(|errors| ProxyError::ConfigValidation { errors })?;
    Ok(config)
}

/// Resolve the effective file config: the explicit path if given, else the
/// first auto-detected candidate, else built-in defaults.
///
/// Returns the config and a label naming where it came from.
pub async fn resolve(explicit: Option<&Path>) -> Result<(ProxyConfig, String), ProxyError> {
    if let Some(path) = explicit {
        let config = load_file(path).await?;
        return Ok((config, path.display().to_string()));
    }

    for name in CANDIDATES {
        let path = PathBuf::from(name);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::info!(path = %path.display(), "auto-detected config file");
            let config = load_file(&path).await?;
            return Ok((config, path.display().to_string()));
        }
    }

    Ok((ProxyConfig::default(), "defaults".to_string()))
}

/// Apply CLI/env overrides and re-validate the result.
pub fn apply_overrides(
    mut config: ProxyConfig,
    upstream: Option<&str>,
    timeout: Option<u64>,
) -> Result<ProxyConfig, ProxyError> {
    if let Some(upstream) = upstream {
        config.upstream = upstream.to_string();
    }
    if let Some(timeout) = timeout {
        config.timeout = timeout;
    }

    validation::validate(&config).map_err(|errors| ProxyError::ConfigValidation { errors })?;
    Ok(config)
}
