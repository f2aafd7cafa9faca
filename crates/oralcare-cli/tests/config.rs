use oralcare_cli::config::{OralcareConfig, load_config_from, parse_config, save_config_to};

#[test]
fn defaults_point_at_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = OralcareConfig::defaults_in(dir.path());
    assert_eq!(config.watermark_path, dir.path().join("watermark.png"));
    assert_eq!(config.export_timeout_secs, 10);
    assert_eq!(config.config_version, 1);
}

#[test]
fn minimal_config_fills_in_defaults() {
    let config = parse_config(r#"{"watermark_path": "/tmp/wm.png", "output_dir": "out"}"#).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.export_timeout_secs, 10);
    assert_eq!(config.output_dir.to_str(), Some("out"));
}

#[test]
fn current_config_passes_through_unchanged() {
    let config = parse_config(
        r#"{"config_version": 1, "watermark_path": "w.png", "output_dir": ".", "export_timeout_secs": 4}"#,
    )
    .unwrap();
    assert_eq!(config.export_timeout_secs, 4);
    assert_eq!(config.watermark_path.to_str(), Some("w.png"));
}

#[test]
fn newer_config_is_rejected() {
    let err = parse_config(
        r#"{"config_version": 9, "watermark_path": "w.png", "output_dir": ".", "export_timeout_secs": 1}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("newer than this build"));
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = OralcareConfig::defaults_in(dir.path());
    config.export_timeout_secs = 3;

    let path = save_config_to(&config, dir.path()).unwrap();

    assert!(!dir.path().join("config.json.tmp").exists());
    assert_eq!(load_config_from(&path).unwrap(), config);
    assert_eq!(
        config.export_options().watermark_timeout,
        std::time::Duration::from_secs(3)
    );
}
