//! Session configuration.

use crate::error::{Error, Result};
use greencabal_loyalty::{DiscountPolicy, ACTIONS_PER_PERCENT, MAX_DISCOUNT_PERCENT};

/// Environment variable overriding actions per percent.
pub const ACTIONS_PER_PERCENT_VAR: &str = "GREENCABAL_ACTIONS_PER_PERCENT";

/// Environment variable overriding the maximum discount.
pub const MAX_DISCOUNT_PERCENT_VAR: &str = "GREENCABAL_MAX_DISCOUNT_PERCENT";

/// Configuration for an account session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Accrual policy used for discount queries
    pub policy: DiscountPolicy,
}

impl SessionConfig {
    /// Create config from environment variables, defaulting to the standard policy.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let actions_per_percent =
            parse_var(&lookup, ACTIONS_PER_PERCENT_VAR)?.unwrap_or(ACTIONS_PER_PERCENT);
        let max_percent =
            parse_var(&lookup, MAX_DISCOUNT_PERCENT_VAR)?.unwrap_or(MAX_DISCOUNT_PERCENT);

        let policy = DiscountPolicy::new(actions_per_percent, max_percent)
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self { policy })
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> Result<Option<u32>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("Invalid {}: {:?}", key, raw))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_standard_policy() {
        let config = SessionConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.policy, DiscountPolicy::STANDARD);
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn overrides_from_vars() {
        let config = SessionConfig::from_lookup(lookup(&[
            (ACTIONS_PER_PERCENT_VAR, "10"),
            (MAX_DISCOUNT_PERCENT_VAR, " 25 "),
        ]))
        .unwrap();
        assert_eq!(config.policy.actions_per_percent(), 10);
        assert_eq!(config.policy.max_percent(), 25);
    }

    #[test]
    fn rejects_garbage() {
        let err = SessionConfig::from_lookup(lookup(&[(ACTIONS_PER_PERCENT_VAR, "twenty")]));
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn rejects_invalid_policy() {
        let err = SessionConfig::from_lookup(lookup(&[(ACTIONS_PER_PERCENT_VAR, "0")]));
        assert!(matches!(err, Err(Error::Config(_))));

        let err = SessionConfig::from_lookup(lookup(&[(MAX_DISCOUNT_PERCENT_VAR, "150")]));
        assert!(matches!(err, Err(Error::Config(_))));
    }
}
