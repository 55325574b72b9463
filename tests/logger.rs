use contact_popup::config::LoggingConfig;
use contact_popup::logger;

#[test]
fn test_logging_disabled_installs_nothing() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert_eq!(logger::init(&config).unwrap(), None);
}

#[test]
fn test_log_file_path() {
    let path = logger::get_log_file_path().unwrap();
    assert!(path.ends_with("contact-popup/contact-popup.log"));
}

#[test]
fn test_file_logging_writes_records() {
    let temp_dir = std::env::temp_dir().join("contact_popup_test_logger");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let path = temp_dir.join("nested").join("test.log");

    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
    };
    logger::init_to_file(&config, &path).unwrap();
    log::info!("Test message with file");
    log::logger().flush();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Test message with file"));
    assert!(content.contains("INFO"));

    // The global logger can only be installed once per process
    assert!(logger::init_to_file(&config, &path).is_err());

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        enabled: true,
        level: "verbose".to_string(),
    };
    let path = std::env::temp_dir().join("contact_popup_never_written.log");
    assert!(logger::init_to_file(&config, &path).is_err());
}
