//! Property configuration file.
//!
//! ```toml
//! property_name = "Harbor Inn"
//! room_keys = 100
//! historical_years = [2022, 2023, 2024]
//! forecast_years = [2025, 2026, 2027]
//! ytd_year = 2025
//! reserve_for_replacement_percent = "4.0"
//!
//! [forecast]
//! occupancy_method = "direct"
//! adr_method = "flat"
//! adr_flat_growth = "3.5"
//!
//! [forecast.methods]
//! "expense.rooms" = "por"
//! "expense.insurance" = "manual"
//! ```
//!
//! Everything under `[forecast]` is optional. Missing switches keep the
//! store defaults.

use std::collections::BTreeMap;
use std::path::Path;

use proforma_core::inputs::LineItemStore;
use proforma_core::models::{
    AdrGrowthMethod, AssumptionsError, ExpenseLine, ForecastMethod, InputLine, OccupancyMethod,
    PropertyAssumptions, Timeline, TimelineError, ValuationAssumptions, Year,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid timeline: {0}")]
    Timeline(#[from] TimelineError),

    #[error("invalid property assumptions: {0}")]
    Assumptions(#[from] AssumptionsError),

    #[error("unrecognised occupancy method '{0}' (expected 'direct' or 'growth')")]
    UnknownOccupancyMethod(String),

    #[error("unrecognised ADR method '{0}' (expected 'flat' or 'per_year')")]
    UnknownAdrMethod(String),

    #[error("'{0}' in [forecast.methods] is not an expense line")]
    NotAnExpenseLine(String),

    #[error("unrecognised forecast method '{method}' for '{line}'")]
    UnknownMethod { line: String, method: String },
}

/// The top level of the configuration file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PropertyConfig {
    pub property_name: String,
    pub room_keys: u32,
    pub historical_years: Vec<Year>,
    pub forecast_years: Vec<Year>,
    #[serde(default)]
    pub ytd_year: Option<Year>,
    #[serde(default)]
    pub reserve_for_replacement_percent: Decimal,
    #[serde(default)]
    pub forecast: ForecastSettings,
}

/// The `[forecast]` table: method switches and scalar inputs.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ForecastSettings {
    pub occupancy_method: Option<String>,
    pub adr_method: Option<String>,
    pub adr_flat_growth: Option<String>,
    /// Expense key (`expense.rooms`) to method name (`por`).
    #[serde(default)]
    pub methods: BTreeMap<String, String>,
}

impl PropertyConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn timeline(&self) -> Result<Timeline, ConfigError> {
        Ok(Timeline::new(
            self.historical_years.clone(),
            self.forecast_years.clone(),
            self.ytd_year,
        )?)
    }

    pub fn assumptions(&self) -> Result<PropertyAssumptions, ConfigError> {
        let assumptions = PropertyAssumptions {
            room_keys: self.room_keys,
            valuation: ValuationAssumptions {
                reserve_for_replacement_percent: self.reserve_for_replacement_percent,
            },
        };
        assumptions.validate()?;
        Ok(assumptions)
    }
}

impl ForecastSettings {
    /// Applies the switches to a store. Nothing is written unless every
    /// setting is valid.
    pub fn apply(
        &self,
        store: &mut LineItemStore,
    ) -> Result<(), ConfigError> {
        let occupancy = self
            .occupancy_method
            .as_deref()
            .map(|name| {
                OccupancyMethod::parse(name)
                    .ok_or_else(|| ConfigError::UnknownOccupancyMethod(name.to_string()))
            })
            .transpose()?;
        let adr = self
            .adr_method
            .as_deref()
            .map(|name| {
                AdrGrowthMethod::parse(name)
                    .ok_or_else(|| ConfigError::UnknownAdrMethod(name.to_string()))
            })
            .transpose()?;
        let methods = self
            .methods
            .iter()
            .map(|(key, name)| parse_method_entry(key, name))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(method) = occupancy {
            store.set_occupancy_method(method);
        }
        if let Some(method) = adr {
            store.set_adr_method(method);
        }
        if let Some(growth) = &self.adr_flat_growth {
            store.set_adr_flat_growth(growth);
        }
        for (line, method) in methods {
            store.set_method(line, method);
        }
        Ok(())
    }
}

fn parse_method_entry(
    key: &str,
    name: &str,
) -> Result<(ExpenseLine, ForecastMethod), ConfigError> {
    let Some(InputLine::Expense(line)) = InputLine::parse(key) else {
        return Err(ConfigError::NotAnExpenseLine(key.to_string()));
    };
    let method = ForecastMethod::parse(name).ok_or_else(|| ConfigError::UnknownMethod {
        line: key.to_string(),
        method: name.to_string(),
    })?;
    Ok((line, method))
}
