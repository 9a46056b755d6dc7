use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn unset_variables_use_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_variables_use_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(config, ServerConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn port_and_bind_addr_are_read() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let config = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "::1")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:3000");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
}

// =============================================================
// .env file
// =============================================================

#[test]
fn missing_env_file_is_silent() {
    let missing = std::env::temp_dir().join("storefront-config-test-missing.env");
    assert!(!report_env_file(dotenvy::from_path(&missing)));
    assert!(!report_env_file(Ok(())));
}

#[test]
fn malformed_env_file_is_reported() {
    let path = std::env::temp_dir().join("storefront-config-test-malformed.env");
    std::fs::write(&path, "THIS LINE HAS NO EQUALS SIGN\n").unwrap();
    let result = dotenvy::from_path_iter(&path).and_then(|mut lines| lines.try_for_each(|line| line.map(|_| ())));
    std::fs::remove_file(&path).unwrap();
    assert!(report_env_file(result));
}
