use crate::core::ScrapeSettings;
use crate::utils::error::{EiError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid placeholder pattern"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub name: String,
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: String,
    pub postal_code_path: String,
    pub discovery_table_id: String,
    pub data_table_id: String,
    pub request_timeout_seconds: Option<u64>,
    pub concurrent_requests: Option<usize>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, substituting `${VAR}` from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| EiError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn concurrent_requests(&self) -> usize {
        self.source.concurrent_requests.unwrap_or(1)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.source.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }

    pub fn scrape_settings(&self) -> ScrapeSettings {
        ScrapeSettings {
            base_url: self.source.base_url.clone(),
            postal_code_path: self.source.postal_code_path.clone(),
            discovery_table_id: self.source.discovery_table_id.clone(),
            data_table_id: self.source.data_table_id.clone(),
            concurrent_requests: self.concurrent_requests(),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("application.name", &self.application.name)?;
        validate_range("application.port", self.application.port, 1, u16::MAX)?;
        validate_url("source.base_url", &self.source.base_url)?;
        validate_non_empty_string("source.discovery_table_id", &self.source.discovery_table_id)?;
        validate_non_empty_string("source.data_table_id", &self.source.data_table_id)?;

        if let Some(concurrent) = self.source.concurrent_requests {
            validate_positive_number("source.concurrent_requests", concurrent, 1)?;
        }
        if let Some(timeout) = self.source.request_timeout_seconds {
            validate_range("source.request_timeout_seconds", timeout, 1, 3600)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[application]
name = "simple-ei"
port = 8080

[source]
base_url = "https://ei.example.gc.ca"
postal_code_path = "/ei_regions/eng/postalcode.aspx?_code="
discovery_table_id = "postalCodeTable"
data_table_id = "eiTable"
"#;

    #[test]
    fn test_parse_minimal_config() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.application.name, "simple-ei");
        assert_eq!(config.application.host, "0.0.0.0");
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.concurrent_requests(), 1);
        assert!(config.request_timeout().is_none());
        assert!(config.validate().is_ok());

        let settings = config.scrape_settings();
        assert_eq!(settings.base_url, "https://ei.example.gc.ca");
        assert_eq!(settings.discovery_table_id, "postalCodeTable");
        assert_eq!(settings.data_table_id, "eiTable");
        assert_eq!(settings.concurrent_requests, 1);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SIMPLE_EI_TEST_BASE_URL", "http://127.0.0.1:9999");
        let content = SAMPLE.replace("https://ei.example.gc.ca", "${SIMPLE_EI_TEST_BASE_URL}");
        let config = AppConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.source.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_unknown_env_var_left_verbatim() {
        let content = SAMPLE.replace("eiTable", "${SIMPLE_EI_TEST_UNSET_VARIABLE}");
        let config = AppConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.source.data_table_id, "${SIMPLE_EI_TEST_UNSET_VARIABLE}");
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let err = AppConfig::from_toml_str("[application]\nname = \"x\"\nport = 1\n").unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::from_toml_str(SAMPLE).unwrap();
        config.source.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::from_toml_str(SAMPLE).unwrap();
        config.source.data_table_id = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::from_toml_str(SAMPLE).unwrap();
        config.application.port = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::from_toml_str(SAMPLE).unwrap();
        config.source.concurrent_requests = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_optional_source_settings() {
        let content = format!("{}request_timeout_seconds = 10\nconcurrent_requests = 4\n", SAMPLE);
        let config = AppConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.scrape_settings().concurrent_requests, 4);
    }
}
