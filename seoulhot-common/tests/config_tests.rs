//! Config file loading tests
//!
//! Covers:
//! - Parsing a complete and a partial TOML file
//! - Missing explicit file is an error
//! - Malformed and unknown keys are rejected
//! - File layer merged under overrides

use seoulhot_common::config::{load_config_file, load_toml_config, ConfigLayer, SiteConfig};
use seoulhot_common::Error;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_toml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes()).expect("Should write temp file");
    file
}

#[test]
fn test_load_complete_toml() {
    let file = write_toml(
        r#"
bind_addr = "0.0.0.0:9000"
api_base_url = "https://reco.example.com/"
top_n = 5
templates_dir = "/srv/seoulhot/templates"
"#,
    );

    let layer = load_toml_config(file.path()).unwrap();
    assert_eq!(layer.bind_addr.as_deref(), Some("0.0.0.0:9000"));
    assert_eq!(layer.api_base_url.as_deref(), Some("https://reco.example.com/"));
    assert_eq!(layer.top_n, Some(5));
    assert_eq!(layer.templates_dir, Some(PathBuf::from("/srv/seoulhot/templates")));

    let config = SiteConfig::resolve(&ConfigLayer::default(), &layer).unwrap();
    assert_eq!(config.api_base_url, "https://reco.example.com");
}

#[test]
fn test_load_partial_toml_keeps_other_defaults() {
    let file = write_toml("top_n = 10\n");

    let layer = load_config_file(Some(file.path())).unwrap();
    let config = SiteConfig::resolve(&ConfigLayer::default(), &layer).unwrap();

    assert_eq!(config.top_n, 10);
    assert_eq!(config.bind_addr, "127.0.0.1:5780");
    assert!(config.templates_dir.is_none());
}

#[test]
fn test_missing_explicit_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let result = load_config_file(Some(&path));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let file = write_toml("top_n = \"three\"\n");
    assert!(matches!(load_toml_config(file.path()), Err(Error::Config(_))));

    let file = write_toml("not toml at all [[[");
    assert!(matches!(load_toml_config(file.path()), Err(Error::Config(_))));
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_toml("api_url = \"http://x\"\n");
    let err = load_toml_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("api_url"));
}
