use super::Config;
use crate::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = Config::parse("").unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.file_extensions, vec!["html"]);
    assert!(!cfg.inline_code);
    assert!(!cfg.source_link);
}

#[test]
fn test_partial_config() {
    let cfg = Config::parse("inline_code = true\nfile_extensions = [\"html\", \"htm\"]").unwrap();
    assert!(cfg.inline_code);
    assert!(!cfg.source_link);
    assert_eq!(cfg.file_extensions, vec!["html", "htm"]);
}

#[test]
fn test_malformed_config_is_typed_error() {
    let err = Config::parse("inline_code = = true").unwrap_err();
    assert!(matches!(err, Error::Config { .. }), "{err:?}");
    assert!(err.to_string().starts_with("invalid config: "));
}

#[test]
fn test_invalid_config_falls_back() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "inline_code = = true").unwrap();

    assert_eq!(Config::load_from(file.path()), Config::default());
}

#[test]
fn test_missing_config_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("sphinxstrap.toml"));
    assert_eq!(cfg, Config::default());
}
