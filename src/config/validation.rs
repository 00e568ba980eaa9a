//! Configuration validation with detailed error reporting.
//!
//! The [`validate`] function checks a parsed [`ProxyConfig`] for an
//! unusable upstream URL, malformed path templates, and a zero timeout.
//! Returns a list of [`ValidationError`] values with per-field
//! suggestions.

use url::Url;

use super::model::ProxyConfig;
use crate::error::ValidationError;

/// Validate the upstream base URL. Returns `Ok(())` or a human-readable error.
pub fn validate_upstream(upstream: &str) -> Result<(), String> {
    let parsed = Url::parse(upstream).map_err(|_| format!("'{upstream}' is not a valid URL"))?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(format!(
            "unsupported scheme '{scheme}' (expected http or https)"
        ));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err("upstream must not carry a query or fragment".into());
    }
    Ok(())
}

/// Validate a path template. Returns `Ok(())` or a human-readable error.
pub fn validate_path(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("path cannot be empty".into());
    }
    if !path.starts_with('/') {
        return Err("path must start with '/'".into());
    }
    Ok(())
}

pub fn validate(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_upstream(&config.upstream) {
        errors.push(ValidationError {
            field: "upstream".into(),
            message: msg,
            suggestion: if config.upstream.contains("://") {
                None
            } else {
                Some(format!("did you mean 'https://{}'?", config.upstream))
            },
        });
    }

    for (field, path) in [
        ("api_path", &config.api_path),
        ("autocomplete_path", &config.autocomplete_path),
    ] {
        if let Err(msg) = validate_path(path) {
            errors.push(ValidationError {
                field: field.into(),
                message: msg,
                suggestion: if path.is_empty() {
                    None
                } else {
                    Some(format!("did you mean '/{path}'?"))
                },
            });
        }
    }

    if config.autocomplete_path.contains('?') {
        errors.push(ValidationError {
            field: "autocomplete_path".into(),
            message: "must not contain a query, the search text is appended as '?q='".into(),
            suggestion: None,
        });
    }

    if config.timeout == 0 {
        errors.push(ValidationError {
            field: "timeout".into(),
            message: "must be greater than 0".into(),
            suggestion: Some("the default is 30000 ms".into()),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[must_use]
pub fn format_validation_report(path: &str, config: &ProxyConfig) -> String {
    let base = config.upstream_base();
    let lines = [
        format!("  upstream:      {base}"),
        format!("  /api          -> {base}{}", config.api_path),
        format!("  /autocomplete -> {base}{}?q=...", config.autocomplete_path),
        "  /image        -> caller-supplied URL".to_string(),
        format!("  timeout:       {}ms", config.timeout),
    ];

    format!("{path} is valid\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes() {
        assert!(validate(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn missing_scheme_suggests_https() {
        let config = ProxyConfig {
            upstream: "api.example.com".into(),
            ..ProxyConfig::default()
        };
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "upstream");
        assert_eq!(
            errors[0].suggestion.as_deref(),
            Some("did you mean 'https://api.example.com'?")
        );
    }

    #[test]
    fn non_http_scheme_fails() {
        let config = ProxyConfig {
            upstream: "ftp://files.example.com".into(),
            ..ProxyConfig::default()
        };
        let errors = validate(&config).unwrap_err();
        assert!(errors[0].message.contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn upstream_with_query_fails() {
        let config = ProxyConfig {
            upstream: "https://api.example.com/?x=1".into(),
            ..ProxyConfig::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn relative_paths_fail() {
        let config = ProxyConfig {
            api_path: "index.php".into(),
            autocomplete_path: String::new(),
            ..ProxyConfig::default()
        };
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0].suggestion.as_deref(),
            Some("did you mean '/index.php'?")
        );
        assert!(errors[1].message.contains("cannot be empty"));
    }

    #[test]
    fn autocomplete_query_fails() {
        let config = ProxyConfig {
            autocomplete_path: "/autocomplete.php?q=".into(),
            ..ProxyConfig::default()
        };
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors[0].field, "autocomplete_path");
    }

    #[test]
    fn zero_timeout_fails() {
        let config = ProxyConfig {
            timeout: 0,
            ..ProxyConfig::default()
        };
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors[0].field, "timeout");
    }

    #[test]
    fn report_lists_each_route() {
        let report = format_validation_report("m3-proxy.yaml", &ProxyConfig::default());
        assert!(report.starts_with("m3-proxy.yaml is valid"));
        assert!(report.contains("/api          -> https://api.rule34.xxx/index.php"));
        assert!(report.contains("/autocomplete -> https://api.rule34.xxx/autocomplete.php?q=..."));
    }
}
