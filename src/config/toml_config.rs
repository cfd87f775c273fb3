use crate::utils::error::{Result, ToolkitError};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub transform: TransformSection,
    pub inspect: Option<InspectSection>,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformSection {
    pub input_path: String,
    pub output_path: String,
    pub seed_sample: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectSection {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ToolkitError::from_io(&path.as_ref().display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ToolkitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn seed_sample(&self) -> bool {
        self.transform.seed_sample.unwrap_or(true)
    }

    pub fn inspect_enabled(&self) -> bool {
        self.inspect
            .as_ref()
            .and_then(|i| i.enabled)
            .unwrap_or(true)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("transform.input_path", &self.transform.input_path)?;
        validate_path("transform.output_path", &self.transform.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [transform]
            input_path = "my_input.txt"
            output_path = "my_output.txt"
            "#,
        )
        .unwrap();

        assert_eq!(config.transform.input_path, "my_input.txt");
        assert!(config.seed_sample());
        assert!(config.inspect_enabled());
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [transform]
            input_path = "in.txt"
            output_path = "out/result.txt"
            seed_sample = false

            [inspect]
            enabled = false

            [monitoring]
            enabled = true
            "#,
        )
        .unwrap();

        assert!(!config.seed_sample());
        assert!(!config.inspect_enabled());
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("not valid toml [").unwrap_err();
        assert!(matches!(err, ToolkitError::ConfigError { .. }));
    }

    #[test]
    fn test_unknown_env_vars_are_left_in_place() {
        let config = TomlConfig::from_toml_str(
            r#"
            [transform]
            input_path = "${THIS_VAR_SHOULD_NOT_EXIST_ANYWHERE}/in.txt"
            output_path = "out.txt"
            "#,
        )
        .unwrap();

        assert!(config
            .transform
            .input_path
            .contains("${THIS_VAR_SHOULD_NOT_EXIST_ANYWHERE}"));
    }
}
