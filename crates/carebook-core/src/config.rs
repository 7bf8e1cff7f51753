//! Booking configuration supplied by the host app.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scheduling::{DEFAULT_HORIZON_DAYS, DEFAULT_PAGE_SIZE};

/// Largest horizon the calendar strip supports.
pub const MAX_HORIZON_DAYS: u32 = 365;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for date horizon, slot paging, fees and directory search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Days past today offered for booking
    pub horizon_days: u32,
    /// Slots per grid page
    pub page_size: u32,
    /// Flat booking charge added to every appointment, in minor units
    pub booking_charge_minor: u64,
    /// Prefix used when formatting amounts
    pub currency_symbol: String,
    /// Maximum directory search results
    pub search_limit: u32,
    /// Minimum fuzzy score for a directory search hit
    pub min_search_score: f64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            page_size: DEFAULT_PAGE_SIZE as u32,
            booking_charge_minor: 0,
            currency_symbol: "Rs.".to_string(),
            search_limit: 20,
            min_search_score: 0.35,
        }
    }
}

impl BookingConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: BookingConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::info!(
            horizon_days = config.horizon_days,
            page_size = config.page_size,
            "loaded booking config"
        );
        Ok(config)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate value ranges.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "page_size",
                reason: "must be greater than zero".into(),
            });
        }
        if self.horizon_days > MAX_HORIZON_DAYS {
            return Err(ConfigError::Invalid {
                field: "horizon_days",
                reason: format!("must be at most {}", MAX_HORIZON_DAYS),
            });
        }
        if !(0.0..=1.0).contains(&self.min_search_score) {
            return Err(ConfigError::Invalid {
                field: "min_search_score",
                reason: "must be between 0 and 1".into(),
            });
        }
        Ok(())
    }
}
