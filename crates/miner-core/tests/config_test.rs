//! Config file loading against the real filesystem.

use std::io::Write;

use miner_core::errors::MinerErrorCode;
use miner_core::{ConfigError, MinerConfig};

#[test]
fn load_reads_file_sections() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[poll]
interval_ms = 250

[templates]
prefix = "View."
internal_members = ["has"]

[logging]
level = "debug"
json = true
"#
    )
    .unwrap();

    let config = MinerConfig::load(file.path()).unwrap();
    assert_eq!(config.poll.effective_interval().as_millis(), 250);
    assert_eq!(config.templates.effective_prefix(), "View.");
    assert!(config.templates.is_internal_member("has"));
    assert!(!config.templates.is_internal_member("get"));
    assert_eq!(config.logging.effective_level(), "debug");
    assert!(config.logging.effective_json());
    assert_eq!(config.shape.effective_max_depth(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MinerConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn invalid_value_has_its_own_code() {
    let err = MinerConfig::from_toml("[poll]\ninterval_ms = 0\n").unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_INVALID_VALUE");
}
