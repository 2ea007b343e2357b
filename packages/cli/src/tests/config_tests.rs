use crate::config::{load_params, Config, ConfigError};
use nodejoin_config::constants::{NODEJOIN_PARAMS_FILE, NODEJOIN_TOKEN};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn params_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn clear_env() {
    env::remove_var(NODEJOIN_TOKEN);
    env::remove_var(NODEJOIN_PARAMS_FILE);
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env();

    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_config_from_env_reads_token_and_params() {
    env::set_var(NODEJOIN_TOKEN, "  abcdef.0123456789abcdef\n");
    env::set_var(NODEJOIN_PARAMS_FILE, "/etc/nodejoin/params.json");

    let config = Config::from_env();

    assert_eq!(
        config.given_token.as_deref(),
        Some("abcdef.0123456789abcdef")
    );
    assert_eq!(
        config.params_file,
        Some(PathBuf::from("/etc/nodejoin/params.json"))
    );

    clear_env();
}

#[test]
#[serial]
fn test_config_empty_env_values_are_unset() {
    env::set_var(NODEJOIN_TOKEN, "   ");
    env::set_var(NODEJOIN_PARAMS_FILE, "");

    let config = Config::from_env();

    assert_eq!(config.given_token, None);
    assert_eq!(config.params_file, None);

    clear_env();
}

#[test]
fn test_discovery_params_argument_wins() {
    let file = params_file(r#"{"discovery": {"givenToken": "fromfile.x"}}"#);
    let config = Config {
        given_token: Some("fromenv.x".to_string()),
        params_file: Some(file.path().to_path_buf()),
    };

    let discovery = config
        .discovery_params(Some("fromarg.x"), Some(file.path()))
        .unwrap();

    assert_eq!(discovery.given_token, "fromarg.x");
}

#[test]
fn test_discovery_params_file_flag_beats_env() {
    let file = params_file(r#"{"discovery": {"givenToken": "fromfile.x"}}"#);
    let config = Config {
        given_token: Some("fromenv.x".to_string()),
        params_file: None,
    };

    let discovery = config.discovery_params(None, Some(file.path())).unwrap();

    assert_eq!(discovery.given_token, "fromfile.x");
}

#[test]
fn test_discovery_params_env_token_beats_env_file() {
    let file = params_file(r#"{"discovery": {"givenToken": "fromfile.x"}}"#);
    let config = Config {
        given_token: Some("fromenv.x".to_string()),
        params_file: Some(file.path().to_path_buf()),
    };

    let discovery = config.discovery_params(None, None).unwrap();

    assert_eq!(discovery.given_token, "fromenv.x");
}

#[test]
fn test_discovery_params_env_file() {
    let file = params_file(r#"{"discovery": {"givenToken": "fromfile.x"}}"#);
    let config = Config {
        given_token: None,
        params_file: Some(file.path().to_path_buf()),
    };

    let discovery = config.discovery_params(None, None).unwrap();

    assert_eq!(discovery.given_token, "fromfile.x");
}

#[test]
fn test_discovery_params_nothing_configured() {
    let discovery = Config::default().discovery_params(None, None).unwrap();
    assert!(discovery.given_token.is_empty());
}

#[test]
fn test_load_params_missing_file() {
    let result = load_params(&PathBuf::from("/nonexistent/nodejoin/params.json"));
    assert!(matches!(result.unwrap_err(), ConfigError::ParamsRead { .. }));
}

#[test]
fn test_load_params_invalid_json() {
    let file = params_file("discovery: yaml-not-json");

    let err = load_params(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ParamsParse { .. }));
    assert!(err.to_string().starts_with("Failed to parse params file"));
}
