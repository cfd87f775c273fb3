use tempfile::TempDir;
use text_toolkit::utils::validation::Validate;
use text_toolkit::{TomlConfig, ToolkitError};

#[test]
fn test_from_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("toolkit.toml");

    std::fs::write(
        &config_path,
        r#"
[transform]
input_path = "my_input.txt"
output_path = "out/my_output.txt"
seed_sample = false

[inspect]
enabled = false

[monitoring]
enabled = true
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(config_path.to_str().unwrap()).unwrap();

    assert_eq!(config.transform.input_path, "my_input.txt");
    assert_eq!(config.transform.output_path, "out/my_output.txt");
    assert!(!config.seed_sample());
    assert!(!config.inspect_enabled());
    assert!(config.monitoring_enabled());
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_file_missing_file_is_classified() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");

    let err = TomlConfig::from_file(missing.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ToolkitError::MissingInputError { .. }));
}

#[test]
fn test_env_vars_are_expanded() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("toolkit.toml");

    std::env::set_var("TOOLKIT_TEST_OUTPUT_DIR", "expanded_dir");
    std::fs::write(
        &config_path,
        r#"
[transform]
input_path = "my_input.txt"
output_path = "${TOOLKIT_TEST_OUTPUT_DIR}/my_output.txt"
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(config.transform.output_path, "expanded_dir/my_output.txt");
}
