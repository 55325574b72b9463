use contact_popup::config::Config;
use contact_popup::selection::SelectOption;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.close_delay_ms, 300);
    assert_eq!(config.ui.close_delay(), Duration::from_millis(300));
    assert_eq!(config.ui.popup_width_percent, 70);
    assert!(!config.logging.enabled);
    assert!(config.options.materials.iter().any(|o| o.value == "javascript"));
    assert!(config.options.materials.iter().any(|o| o.value == "react"));
    assert!(!config.options.preferences.is_empty());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid popup width should fail
    config.ui.popup_width_percent = 10;
    assert!(config.validate().is_err());

    // Reset and test an excessive close delay
    config.ui.popup_width_percent = 70;
    config.ui.close_delay_ms = 10_000;
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.ui.close_delay_ms = 300;
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_option_list_validation() {
    let mut config = Config::default();
    config.options.materials.push(SelectOption::new("JS again", "javascript"));
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate value 'javascript'"));

    let mut config = Config::default();
    config.options.preferences.clear();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.options.preferences.push(SelectOption::new("Nameless", ""));
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("close_delay_ms = 300"));
    assert!(toml_str.contains("value = \"javascript\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
close_delay_ms = 500

[logging]
enabled = true

[[options.preferences]]
text = "Podcasts"
value = "podcasts"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.close_delay_ms, 500);
    assert!(config.logging.enabled);
    assert_eq!(config.options.preferences, vec![SelectOption::new("Podcasts", "podcasts")]);

    // Check that unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.popup_width_percent, 70);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.options.materials, Config::default().options.materials);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.close_delay_ms, default_config.ui.close_delay_ms);
    assert_eq!(config.ui.title, default_config.ui.title);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.options.preferences, default_config.options.preferences);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let temp_dir = std::env::temp_dir().join("contact_popup_test_invalid_config");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();
    let path = temp_dir.join("config.toml");
    std::fs::write(&path, "[ui]\npopup_width_percent = 5\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("popup_width_percent"));

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("contact_popup_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // The generated file loads back cleanly
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# contact-popup Configuration File"));
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.ui.close_delay_ms, 300);

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
