//! Integration tests for config loading across all file formats.

use std::path::Path;

use m3_proxy::config::model::ProxyConfig;
use m3_proxy::config::validation::validate;
use m3_proxy::config::{self, parse_config_str};
use m3_proxy::error::ProxyError;

fn load_example(name: &str) -> String {
    let path = format!("example/{name}");
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}

#[test]
fn yaml_example_loads_and_validates() {
    let content = load_example("m3-proxy.yaml");
    let config = parse_config_str("yaml", &content, "m3-proxy.yaml").unwrap();
    validate(&config).unwrap();
    assert_eq!(config.upstream, "http://localhost:9000");
    assert_eq!(config.timeout, 10_000);
    // Unset fields keep their defaults.
    assert_eq!(config.api_path, ProxyConfig::default().api_path);
}

#[test]
fn yaml_full_example_loads_and_validates() {
    let content = load_example("full.yaml");
    let config = parse_config_str("yaml", &content, "full.yaml").unwrap();
    validate(&config).unwrap();
    assert!(config.api_path.ends_with("&json=1"));
}

#[cfg(feature = "json")]
#[test]
fn json_example_loads_and_validates() {
    let content = load_example("m3-proxy.json");
    let config = parse_config_str("json", &content, "m3-proxy.json").unwrap();
    validate(&config).unwrap();
}

#[cfg(feature = "toml")]
#[test]
fn toml_example_loads_and_validates() {
    let content = load_example("m3-proxy.toml");
    let config = parse_config_str("toml", &content, "m3-proxy.toml").unwrap();
    validate(&config).unwrap();
}

#[cfg(all(feature = "json", feature = "toml"))]
#[test]
fn all_formats_produce_equivalent_configs() {
    let yaml = parse_config_str("yaml", &load_example("m3-proxy.yaml"), "yaml").unwrap();
    let json = parse_config_str("json", &load_example("m3-proxy.json"), "json").unwrap();
    let toml = parse_config_str("toml", &load_example("m3-proxy.toml"), "toml").unwrap();

    assert_eq!(yaml, json);
    assert_eq!(yaml, toml);
}

#[test]
fn unsupported_format_returns_error() {
    let result = parse_config_str("xml", "{}", "test.xml");
    assert!(result.is_err());
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let result = parse_config_str("yaml", "timeout: [not, a, number]", "bad.yaml");
    assert!(matches!(result, Err(ProxyError::ConfigParse { .. })));
}

#[tokio::test]
async fn invalid_file_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m3-proxy.yaml");
    std::fs::write(&path, "upstream: \"localhost:9000\"\ntimeout: 0\n").unwrap();

    match config::load_file(&path).await {
        Err(ProxyError::ConfigValidation { errors }) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, ["upstream", "timeout"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn explicit_path_wins_over_defaults() {
    let (config, source) = config::resolve(Some(Path::new("example/m3-proxy.yaml")))
        .await
        .unwrap();
    assert_eq!(config.upstream, "http://localhost:9000");
    assert_eq!(source, "example/m3-proxy.yaml");
}
