use crate::utils::error::{CargoError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_COLLECTED_PER_PACKAGE: u64 = 10;
pub const MAX_COLLECTED_PER_PACKAGE: u64 = 1_000_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How `transport_package` surfaces a refused package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Hand back `Err(TransportRejection)`.
    #[default]
    ReturnError,
    /// Panic with the rejection message.
    Panic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    pub company: CompanySection,
    pub pricing: Option<PricingSection>,
    pub transport: Option<TransportSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSection {
    pub collected_per_package: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportSection {
    pub failure_mode: Option<FailureMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

impl CompanyConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            company: CompanySection { name: name.into() },
            pricing: None,
            transport: None,
            logging: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CargoError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CargoError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("company.name", &self.company.name)?;
        validate_range(
            "pricing.collected_per_package",
            self.collected_per_package(),
            1,
            MAX_COLLECTED_PER_PACKAGE,
        )?;
        validate_one_of("logging.level", self.log_level(), &LOG_LEVELS)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.company.name
    }

    pub fn collected_per_package(&self) -> u64 {
        self.pricing
            .as_ref()
            .and_then(|p| p.collected_per_package)
            .unwrap_or(DEFAULT_COLLECTED_PER_PACKAGE)
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.transport
            .as_ref()
            .and_then(|t| t.failure_mode)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

impl Validate for CompanyConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = CompanyConfig::from_toml_str(
            r#"
[company]
name = "Skyline Cargo"
"#,
        )
        .unwrap();

        assert_eq!(config.name(), "Skyline Cargo");
        assert_eq!(config.collected_per_package(), 10);
        assert_eq!(config.failure_mode(), FailureMode::ReturnError);
        assert_eq!(config.log_level(), "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = CompanyConfig::from_toml_str(
            r#"
[company]
name = "Skyline Cargo"

[pricing]
collected_per_package = 25

[transport]
failure_mode = "panic"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.collected_per_package(), 25);
        assert_eq!(config.failure_mode(), FailureMode::Panic);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SMALL_AIR_CARGO_TEST_COMPANY", "Env Air");
        let config = CompanyConfig::from_toml_str(
            r#"
[company]
name = "${SMALL_AIR_CARGO_TEST_COMPANY}"
"#,
        )
        .unwrap();
        assert_eq!(config.name(), "Env Air");

        let untouched = CompanyConfig::from_toml_str(
            r#"
[company]
name = "${SMALL_AIR_CARGO_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(untouched.name(), "${SMALL_AIR_CARGO_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = CompanyConfig::new("  ");
        assert!(matches!(
            config.validate(),
            Err(CargoError::InvalidConfigValueError { ref field, .. }) if field == "company.name"
        ));

        config.company.name = "Skyline Cargo".to_string();
        config.pricing = Some(PricingSection {
            collected_per_package: Some(0),
        });
        assert!(config.validate().is_err());

        config.pricing = Some(PricingSection {
            collected_per_package: Some(u64::MAX / 2),
        });
        assert!(matches!(
            config.validate(),
            Err(CargoError::InvalidConfigValueError { ref field, .. })
                if field == "pricing.collected_per_package"
        ));

        config.pricing = Some(PricingSection {
            collected_per_package: Some(MAX_COLLECTED_PER_PACKAGE),
        });
        assert!(config.validate().is_ok());

        config.pricing = None;
        config.logging = Some(LoggingSection {
            level: Some("loud".to_string()),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_failure_mode_is_parse_error() {
        let result = CompanyConfig::from_toml_str(
            r#"
[company]
name = "Skyline Cargo"

[transport]
failure_mode = "explode"
"#,
        );
        assert!(matches!(result, Err(CargoError::ConfigParseError { .. })));
    }
}
