use omnicalc::config::{Config, ConfigError};
use omnicalc::shell::CalculatorId;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[contact]\n\
         endpoint = \"http://localhost:8080/send-email\"\n\
         \n\
         [shell]\n\
         default_calculator = \"scientific\""
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.contact.endpoint, "http://localhost:8080/send-email");
    assert_eq!(config.shell.default_calculator, CalculatorId::Scientific);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = NamedTempFile::new().unwrap();
    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config, Config::empty());
}

#[test]
fn test_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[contact\nendpoint = ").unwrap();
    let err = Config::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("omnicalc.toml");
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("omnicalc.toml"));
}
