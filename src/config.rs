//! Tax rule configuration
//!
//! Rules default to the statutory values. A TOML file can override them,
//! selected with `--config` or the `CAPITAL_GAINS_CONFIG` environment variable:
//!
//! ```toml
//! tax_rate = "0.20"
//! exemption_threshold = "20000.00"
//! ```

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, TaxError};
use crate::tax::TaxRules;

pub const CONFIG_ENV_VAR: &str = "CAPITAL_GAINS_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    tax_rate: Option<Decimal>,
    exemption_threshold: Option<Decimal>,
}

/// Pick the config file: explicit path first, then the environment
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Load tax rules, falling back to defaults when no file is configured
pub fn load_rules(explicit: Option<&Path>) -> Result<TaxRules> {
    match resolve_config_path(explicit) {
        Some(path) => {
            info!("Loading tax rules from {}", path.display());
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            parse_rules(&contents)
                .with_context(|| format!("invalid config file {}", path.display()))
        }
        None => Ok(TaxRules::default()),
    }
}

/// Parse and validate rules from TOML text
pub fn parse_rules(contents: &str) -> Result<TaxRules> {
    let raw: RawConfig =
        toml::from_str(contents).map_err(|e| TaxError::Config(e.to_string()))?;

    let defaults = TaxRules::default();
    let rules = TaxRules {
        tax_rate: raw.tax_rate.unwrap_or(defaults.tax_rate),
        exemption_threshold: raw.exemption_threshold.unwrap_or(defaults.exemption_threshold),
    };

    if rules.tax_rate < Decimal::ZERO || rules.tax_rate > Decimal::ONE {
        return Err(TaxError::Config(format!(
            "tax_rate must be between 0 and 1, got {}",
            rules.tax_rate
        ))
        .into());
    }

    if rules.exemption_threshold < Decimal::ZERO {
        return Err(TaxError::Config(format!(
            "exemption_threshold must not be negative, got {}",
            rules.exemption_threshold
        ))
        .into());
    }

    Ok(rules)
}
