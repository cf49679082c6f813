use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).expect("defaults");
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn host_and_port_are_read() {
    let config = ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).expect("valid");
    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("HOST", "")])).expect("defaults");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, DEFAULT_HOST);
}

#[test]
fn invalid_port_names_the_key() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    let ConfigError::Invalid { key, value, .. } = &err;
    assert_eq!(*key, "PORT");
    assert_eq!(value, "http");
    assert!(err.to_string().starts_with("invalid PORT: \"http\""));
}

#[test]
fn port_out_of_range_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn invalid_host_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("HOST", "localhost:80")])).is_err());
}

#[test]
fn compression_can_be_disabled() {
    let config = ServerConfig::from_lookup(lookup(&[("COMPRESSION", "off")])).expect("valid");
    assert!(!config.compression);
    assert!(ServerConfig::from_lookup(lookup(&[("COMPRESSION", "sometimes")])).is_err());
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", "On"] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool("maybe"), None);
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_matches_lookup_over_process_env() {
    let from_env = ServerConfig::from_env();
    let from_lookup = ServerConfig::from_lookup(|key| std::env::var(key).ok());
    assert_eq!(from_env, from_lookup);
}
