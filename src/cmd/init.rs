//! `m3-proxy init` — generate a starter configuration file.
//!
//! Writes a YAML, JSON, or TOML file listing every setting with its
//! default value.

use std::path::PathBuf;

use crate::cli::{ConfigFormat, InitArgs};
use crate::error::ProxyError;

pub fn execute(args: &InitArgs) -> Result<(), ProxyError> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("m3-proxy.{}", args.format.extension())));

    if output.exists() && !args.force {
        return Err(ProxyError::FileExists { path: output });
    }

    std::fs::write(&output, template(&args.format))?;
    println!("Created {}", output.display());
    Ok(())
}

#[must_use]
pub const fn template(format: &ConfigFormat) -> &'static str {
    match format {
        ConfigFormat::Yaml => YAML_TEMPLATE,
        ConfigFormat::Json => JSON_TEMPLATE,
        ConfigFormat::Toml => TOML_TEMPLATE,
    }
}

const YAML_TEMPLATE: &str = r#"# m3-proxy config
#
# All values shown are defaults. CLI flags (--upstream, --timeout) and
# their env vars (UPSTREAM_URL, REQUEST_TIMEOUT_MS) override them.

# Scheme and host every forward goes to
upstream: "https://api.rule34.xxx"

# /api target; the caller's query string is appended
api_path: "/index.php?page=dapi&s=post&q=index"

# /autocomplete target; the search text is appended as ?q=
autocomplete_path: "/autocomplete.php"

# Upstream timeout in milliseconds
timeout: 30000
"#;

const JSON_TEMPLATE: &str = r#"{
  "upstream": "https://api.rule34.xxx",
  "api_path": "/index.php?page=dapi&s=post&q=index",
  "autocomplete_path": "/autocomplete.php",
  "timeout": 30000
}
"#;

const TOML_TEMPLATE: &str = r#"# m3-proxy config
#
# All values shown are defaults.

upstream = "https://api.rule34.xxx"
api_path = "/index.php?page=dapi&s=post&q=index"
autocomplete_path = "/autocomplete.php"
timeout = 30000
"#;
