//! The year domain of an operating statement.
//!
//! A [`Timeline`] is one contiguous run of calendar years split into an
//! ordered historical block followed by an ordered forecast block. Every
//! engine accessor classifies its year through the timeline, so the
//! historical/forecast decision is made in exactly one place.
//!
//! # Example
//!
//! ```
//! use proforma_core::models::{Timeline, YearKind};
//!
//! let timeline = Timeline::new(vec![2022, 2023, 2024], vec![2025, 2026], Some(2025)).unwrap();
//!
//! assert!(timeline.is_historical(2023));
//! assert!(timeline.is_forecast(2026));
//! assert_eq!(timeline.classify(2025), Ok(YearKind::Forecast));
//! assert_eq!(timeline.horizon_years(false), vec![2026]);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar year.
pub type Year = i32;

/// Errors raised by the year domain.
///
/// The construction variants describe an unusable timeline. The remaining
/// variants are contract violations: a caller asked about a year the
/// timeline does not cover, or about the wrong kind of year.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("timeline needs at least one historical year")]
    NoHistoricalYears,

    #[error("timeline needs at least one forecast year")]
    NoForecastYears,

    /// Years within a block must increase by exactly one.
    #[error("years must be consecutive and ascending, found {previous} followed by {next}")]
    NotContiguous { previous: Year, next: Year },

    /// The first forecast year must follow the last historical year.
    #[error("forecast years must start at {expected}, found {found}")]
    ForecastGap { expected: Year, found: Year },

    #[error("year-to-date year {0} must be the first forecast year")]
    InvalidYtdYear(Year),

    #[error("year {0} is outside the timeline")]
    OutOfDomain(Year),

    #[error("year {0} is not a forecast year")]
    NotForecastYear(Year),

    #[error("year {0} is not a historical year")]
    NotHistoricalYear(Year),
}

/// Whether a year reads recorded actuals or computed forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearKind {
    Historical,
    Forecast,
}

/// Ordered historical and forecast years with an optional year-to-date year.
///
/// Deserializing goes through [`Timeline::new`], so a stored timeline is
/// checked the same way as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimelineParts")]
pub struct Timeline {
    historical: Vec<Year>,
    forecast: Vec<Year>,
    ytd: Option<Year>,
}

#[derive(Deserialize)]
struct TimelineParts {
    historical: Vec<Year>,
    forecast: Vec<Year>,
    ytd: Option<Year>,
}

impl TryFrom<TimelineParts> for Timeline {
    type Error = TimelineError;

    fn try_from(parts: TimelineParts) -> Result<Self, Self::Error> {
        Timeline::new(parts.historical, parts.forecast, parts.ytd)
    }
}

impl Timeline {
    /// Builds a timeline, checking that the two blocks form one contiguous
    /// ascending run and that the YTD year, if any, opens the forecast block.
    pub fn new(
        historical: Vec<Year>,
        forecast: Vec<Year>,
        ytd: Option<Year>,
    ) -> Result<Self, TimelineError> {
        let (Some(&last_historical), Some(&first_forecast)) = (historical.last(), forecast.first())
        else {
            return Err(if historical.is_empty() {
                TimelineError::NoHistoricalYears
            } else {
                TimelineError::NoForecastYears
            });
        };

        check_consecutive(&historical)?;
        check_consecutive(&forecast)?;

        if first_forecast != last_historical + 1 {
            return Err(TimelineError::ForecastGap {
                expected: last_historical + 1,
                found: first_forecast,
            });
        }

        if let Some(year) = ytd {
            if year != first_forecast {
                return Err(TimelineError::InvalidYtdYear(year));
            }
        }

        Ok(Self {
            historical,
            forecast,
            ytd,
        })
    }

    pub fn historical_years(&self) -> &[Year] {
        &self.historical
    }

    pub fn forecast_years(&self) -> &[Year] {
        &self.forecast
    }

    pub fn ytd_year(&self) -> Option<Year> {
        self.ytd
    }

    /// Every year of the timeline in ascending order.
    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.historical.iter().chain(self.forecast.iter()).copied()
    }

    pub fn is_historical(
        &self,
        year: Year,
    ) -> bool {
        self.historical.contains(&year)
    }

    pub fn is_forecast(
        &self,
        year: Year,
    ) -> bool {
        self.forecast.contains(&year)
    }

    /// Classifies a year, or reports it as outside the timeline.
    pub fn classify(
        &self,
        year: Year,
    ) -> Result<YearKind, TimelineError> {
        if self.is_historical(year) {
            Ok(YearKind::Historical)
        } else if self.is_forecast(year) {
            Ok(YearKind::Forecast)
        } else {
            Err(TimelineError::OutOfDomain(year))
        }
    }

    /// Fails unless `year` is a forecast year.
    pub fn require_forecast(
        &self,
        year: Year,
    ) -> Result<(), TimelineError> {
        match self.classify(year)? {
            YearKind::Forecast => Ok(()),
            YearKind::Historical => Err(TimelineError::NotForecastYear(year)),
        }
    }

    /// Fails unless `year` is a historical year.
    pub fn require_historical(
        &self,
        year: Year,
    ) -> Result<(), TimelineError> {
        match self.classify(year)? {
            YearKind::Historical => Ok(()),
            YearKind::Forecast => Err(TimelineError::NotHistoricalYear(year)),
        }
    }

    /// Where growth chains start. Always `Some` for a validated timeline.
    pub fn last_historical_year(&self) -> Option<Year> {
        self.historical.last().copied()
    }

    /// The year before `year` when it is also on the timeline.
    pub fn prior_year(
        &self,
        year: Year,
    ) -> Option<Year> {
        let prior = year - 1;
        (self.classify(year).is_ok() && self.classify(prior).is_ok()).then_some(prior)
    }

    /// Forecast years that count towards multi-year monetary totals.
    ///
    /// The YTD year is a display split of the first forecast year and is
    /// left out unless `include_ytd` is set.
    pub fn horizon_years(
        &self,
        include_ytd: bool,
    ) -> Vec<Year> {
        self.forecast
            .iter()
            .copied()
            .filter(|year| include_ytd || Some(*year) != self.ytd)
            .collect()
    }
}

fn check_consecutive(years: &[Year]) -> Result<(), TimelineError> {
    for pair in years.windows(2) {
        if pair[1] != pair[0] + 1 {
            return Err(TimelineError::NotContiguous {
                previous: pair[0],
                next: pair[1],
            });
        }
    }
    Ok(())
}

/// Number of days in a calendar year under the Gregorian leap-year rule.
pub fn days_in_year(year: Year) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// Room-nights the property can sell in `year`.
pub fn available_rooms(
    room_keys: u32,
    year: Year,
) -> u64 {
    u64::from(room_keys) * u64::from(days_in_year(year))
}
