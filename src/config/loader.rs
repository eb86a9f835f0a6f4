//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll
//! policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollPolicy, PolicyFile, TaxBracket, TaxTableFile};

/// Loads and provides access to a payroll policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ph_semi_monthly/
/// ├── policy.yaml     # Metadata, hours, deductions, allowances, default split
/// └── tax_table.yaml  # Withholding tax brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use budget_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ph_semi_monthly").unwrap();
/// println!("Loaded policy: {}", loader.policy().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PayrollPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or describes an unusable tax table (empty, or a bracket whose lower
    /// bound exceeds its upper bound).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy_file = Self::load_yaml::<PolicyFile>(&policy_path)?;

        let tax_table_path = path.join("tax_table.yaml");
        let tax_table = Self::load_yaml::<TaxTableFile>(&tax_table_path)?;
        Self::validate_tax_table(&tax_table_path, &tax_table.brackets)?;

        debug!(
            policy = %policy_file.policy.code,
            brackets = tax_table.brackets.len(),
            "Loaded payroll policy"
        );

        let policy = PayrollPolicy::new(
            policy_file.policy,
            policy_file.hours_per_day,
            policy_file.deductions,
            policy_file.allowances,
            tax_table.brackets,
            policy_file.default_budget,
        );

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_tax_table(path: &Path, brackets: &[TaxBracket]) -> EngineResult<()> {
        if brackets.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: "tax table has no brackets".to_string(),
            });
        }

        if let Some(bracket) = brackets.iter().find(|b| b.min > b.max) {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "bracket lower bound {} exceeds upper bound {}",
                    bracket.min, bracket.max
                ),
            });
        }

        Ok(())
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> PayrollPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/ph_semi_monthly"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_config(dir: &Path, policy: &str, tax_table: &str) {
        fs::write(dir.join("policy.yaml"), policy).unwrap();
        fs::write(dir.join("tax_table.yaml"), tax_table).unwrap();
    }

    const POLICY_YAML: &str = r#"
policy:
  code: test
  name: Test policy
  currency_symbol: "₱"
hours_per_day: 8
deductions:
  sss: "1750"
  hdmf: "200"
  philhealth: "1625"
allowances:
  first_period: "1000"
  second_period: "1000"
"#;

    #[test]
    fn test_load_shipped_configuration_matches_defaults() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy(), &PayrollPolicy::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_missing_default_budget_falls_back_to_split() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            POLICY_YAML,
            "brackets:\n  - { min: \"0\", max: \"100\", base: \"0\", marginal_rate: \"0.1\" }\n",
        );

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.policy().default_budget().len(), 3);
        assert_eq!(loader.policy().tax_table()[0].marginal_rate, dec("0.1"));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "policy: [unterminated", "brackets: []\n");

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_tax_table_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), POLICY_YAML, "brackets: []\n");

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert_eq!(message, "tax table has no brackets");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_bracket_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            POLICY_YAML,
            "brackets:\n  - { min: \"500\", max: \"100\", base: \"0\", marginal_rate: \"0.1\" }\n",
        );

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::ConfigParseError { .. })
        ));
    }
}
