use std::fs;
use valuefmt::CaseMapping;
use valuefmt::config::Config;

#[test]
fn save_and_load_yaml_roundtrip() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.yaml");

    let mut cfg = Config::default();
    cfg.formatting.fraction_digits = 3;
    cfg.formatting.case_mapping = CaseMapping::Ascii;
    cfg.logging.file = path.with_extension("log").to_string_lossy().to_string();

    cfg.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.formatting.fraction_digits, 3);
    assert_eq!(loaded.formatting.case_mapping, CaseMapping::Ascii);
    assert_eq!(loaded.logging.file, cfg.logging.file);
    assert_eq!(loaded.samples.people, cfg.samples.people);
}

#[test]
fn config_validation_errors() {
    let mut cfg = Config::default();

    cfg.logging.level = "verbose".to_string();
    assert!(cfg.validate().is_err());

    cfg = Config::default();
    cfg.logging.console_level = Some("loud".to_string());
    assert!(cfg.validate().is_err());

    cfg = Config::default();
    cfg.formatting.fraction_digits = 101;
    let msg = cfg.validate().unwrap_err().to_string();
    assert!(msg.contains("formatting.fraction_digits"));

    cfg = Config::default();
    cfg.formatting.fraction_digits = 100;
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_file_with_invalid_yaml_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"bad: [unclosed").unwrap();
    let err = Config::from_file(tmp.path()).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("Serialization error"));
}

#[test]
fn from_file_missing_is_io_error() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(tmp_dir.path().join("absent.yaml")).unwrap_err();
    assert!(format!("{}", err).contains("I/O error"));
}

#[test]
fn unknown_case_mapping_is_rejected() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"formatting:\n  case_mapping: turkish\n").unwrap();
    assert!(Config::from_file(tmp.path()).is_err());
}
