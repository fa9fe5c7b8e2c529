//! Driver configuration, read from the environment once at startup.

use std::path::PathBuf;

use thiserror::Error;

use gildedrose_core::DomainError;
use gildedrose_inventory::RulePolicy;
use gildedrose_observability::LogFormat;

pub const DAYS_VAR: &str = "GILDEDROSE_DAYS";
pub const CONJURED_EXPIRED_DELTA_VAR: &str = "GILDEDROSE_CONJURED_EXPIRED_DELTA";
pub const INVENTORY_VAR: &str = "GILDEDROSE_INVENTORY";
pub const LOG_FORMAT_VAR: &str = "GILDEDROSE_LOG_FORMAT";

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer (got: {value:?})")]
    InvalidDays { var: String, value: String },

    #[error("GILDEDROSE_CONJURED_EXPIRED_DELTA must be an integer (got: {0:?})")]
    InvalidDelta(String),

    #[error("GILDEDROSE_LOG_FORMAT: {0}")]
    InvalidLogFormat(String),

    #[error(transparent)]
    Policy(#[from] DomainError),
}

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub days: u32,
    pub policy: RulePolicy,
    /// JSON inventory file; `None` runs the built-in sample shop.
    pub inventory_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            policy: RulePolicy::default(),
            inventory_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl SimulationConfig {
    /// Read the process environment, letting a positional `days` argument win.
    pub fn from_env(days_arg: Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), days_arg)
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to defaults;
    /// set-but-invalid keys are errors.
    pub fn from_lookup<F>(lookup: F, days_arg: Option<String>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match days_arg {
            Some(raw) => config.days = parse_days("days argument", &raw)?,
            None => {
                if let Some(raw) = lookup(DAYS_VAR) {
                    config.days = parse_days(DAYS_VAR, &raw)?;
                }
            }
        }

        if let Some(raw) = lookup(CONJURED_EXPIRED_DELTA_VAR) {
            let delta = raw
                .trim()
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidDelta(raw.clone()))?;
            config.policy = RulePolicy::new(delta)?;
        }

        if let Some(raw) = lookup(INVENTORY_VAR) {
            if !raw.trim().is_empty() {
                config.inventory_path = Some(PathBuf::from(raw));
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw.parse().map_err(ConfigError::InvalidLogFormat)?;
        }

        Ok(config)
    }
}

fn parse_days(var: &str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim().parse::<u32>().map_err(|_| ConfigError::InvalidDays {
        var: var.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = SimulationConfig::from_lookup(lookup(&[]), None).unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.days, 2);
        assert_eq!(config.policy.conjured_expired_delta(), -4);
    }

    #[test]
    fn reads_every_variable() {
        let config = SimulationConfig::from_lookup(
            lookup(&[
                (DAYS_VAR, "30"),
                (CONJURED_EXPIRED_DELTA_VAR, "-2"),
                (INVENTORY_VAR, "shop.json"),
                (LOG_FORMAT_VAR, "json"),
            ]),
            None,
        )
        .unwrap();
        assert_eq!(config.days, 30);
        assert_eq!(config.policy.conjured_expired_delta(), -2);
        assert_eq!(config.inventory_path, Some(PathBuf::from("shop.json")));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn positional_days_override_the_environment() {
        let config =
            SimulationConfig::from_lookup(lookup(&[(DAYS_VAR, "30")]), Some("5".into())).unwrap();
        assert_eq!(config.days, 5);
    }

    #[test]
    fn invalid_days_are_reported() {
        let err = SimulationConfig::from_lookup(lookup(&[(DAYS_VAR, "-1")]), None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDays {
                var: DAYS_VAR.to_string(),
                value: "-1".to_string(),
            }
        );
    }

    #[test]
    fn positive_conjured_delta_is_a_policy_error() {
        let err =
            SimulationConfig::from_lookup(lookup(&[(CONJURED_EXPIRED_DELTA_VAR, "3")]), None)
                .unwrap_err();
        assert!(matches!(err, ConfigError::Policy(DomainError::Validation(_))));
    }

    #[test]
    fn unknown_log_format_is_reported() {
        let err = SimulationConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")]), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat(_)));
    }
}
