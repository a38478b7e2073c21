//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a leave
//! accrual policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::AccrualPolicy;

/// Loads and provides access to the leave accrual policy.
///
/// # Directory Structure
///
/// ```text
/// config/leave_policy/
/// └── policy.yaml    # Epoch, grants, monthly credit, bonuses, year-end caps
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/leave_policy").unwrap();
/// println!("Leave system epoch: {}", loader.policy().epoch);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: AccrualPolicy,
}

impl ConfigLoader {
    /// Loads the policy from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing, is not valid YAML, or
    /// describes an inconsistent policy.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/leave_policy")?;
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<AccrualPolicy>(&policy_path)?;
        policy.validate()?;

        debug!(
            path = %policy_path.display(),
            epoch = %policy.epoch,
            bonuses = policy.anniversary_bonuses.len(),
            "Loaded leave accrual policy"
        );

        Ok(Self { policy })
    }

    /// Wraps an already-built policy after validating it.
    pub fn from_policy(policy: AccrualPolicy) -> EngineResult<Self> {
        policy.validate()?;
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

    /// Returns the loaded policy.
    pub fn policy(&self) -> &AccrualPolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> AccrualPolicy {
        self.policy
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            policy: AccrualPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/leave_policy"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "leave_engine_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_shipped_policy() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        assert_eq!(result.unwrap().policy(), &AccrualPolicy::default());
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
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("policy.yaml"), "epoch: [not, a, date").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_inconsistent_policy_returns_invalid_policy() {
        let dir = scratch_dir("inconsistent");
        let mut policy = AccrualPolicy::default();
        policy.balance_ceiling = Decimal::new(4, 0);
        fs::write(dir.join("policy.yaml"), serde_yaml::to_string(&policy).unwrap()).unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidPolicy { field, .. }) => assert_eq!(field, "balance_ceiling"),
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_from_policy_validates() {
        let mut policy = AccrualPolicy::default();
        policy.initial_grant.cutoff_day = 0;
        assert!(ConfigLoader::from_policy(policy).is_err());
    }

    #[test]
    fn test_default_loader_uses_default_policy() {
        assert_eq!(
            ConfigLoader::default().into_policy(),
            AccrualPolicy::default()
        );
    }
}
