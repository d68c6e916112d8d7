//! Demand Engine: rooms supply, occupancy and rate.
//!
//! | Quantity | Historical year | Forecast year |
//! |----------|-----------------|---------------|
//! | Occupancy % | recorded actual | direct input, or prior year × (1 + growth) |
//! | Occupied rooms | available × occupancy, whole rooms | same |
//! | ADR | rooms revenue ÷ occupied rooms | prior year ADR × (1 + growth) |
//! | RevPAR | rooms revenue ÷ available rooms | same |
//! | Rooms revenue | recorded actual | occupied rooms × ADR |
//!
//! Growth chains start from the last historical year, so the first forecast
//! year grows off an actual. RevPAR is taken from rooms revenue, so
//! `revpar × available rooms == rooms revenue` holds even though occupied
//! rooms are whole.

use rust_decimal::Decimal;

use super::common::{grow, mul, percent_of, round_whole, safe_div};
use super::context::ProjectionContext;
use crate::models::{
    ActualLine, AdrGrowthMethod, Department, InputLine, OccupancyMethod, TimelineError, Year,
    YearKind, available_rooms,
};

/// Occupancy, rooms and rate for any timeline year.
#[derive(Clone, Copy)]
pub struct DemandEngine<'a> {
    context: ProjectionContext<'a>,
}

impl<'a> DemandEngine<'a> {
    pub fn new(context: ProjectionContext<'a>) -> Self {
        Self { context }
    }

    /// Room-nights available: keys × days in the year.
    pub fn available_rooms(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        self.context.timeline().classify(year)?;
        Ok(Decimal::from(available_rooms(
            self.context.assumptions().room_keys,
            year,
        )))
    }

    /// Occupancy as a percentage, e.g. `70` for 70%.
    pub fn occupancy_percent(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        match self.context.timeline().classify(year)? {
            YearKind::Historical => self.context.actuals().get(ActualLine::Occupancy, year),
            YearKind::Forecast => {
                let store = self.context.store();
                match store.occupancy_method() {
                    OccupancyMethod::Direct => store.value(InputLine::Occupancy, year),
                    OccupancyMethod::YearOverYearGrowth => {
                        let prior = self.occupancy_percent(self.prior_year(year)?)?;
                        let growth = store.value(InputLine::OccupancyGrowth, year)?;
                        Ok(grow(prior, growth))
                    }
                }
            }
        }
    }

    /// Occupied room-nights, rounded to whole rooms.
    pub fn occupied_rooms(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        let available = self.available_rooms(year)?;
        let occupancy = self.occupancy_percent(year)?;
        Ok(round_whole(percent_of(occupancy, available)))
    }

    /// Average daily rate.
    pub fn adr(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        match self.context.timeline().classify(year)? {
            YearKind::Historical => {
                let revenue = self
                    .context
                    .actuals()
                    .get(ActualLine::Revenue(Department::Rooms), year)?;
                Ok(safe_div(revenue, self.occupied_rooms(year)?))
            }
            YearKind::Forecast => {
                let prior = self.adr(self.prior_year(year)?)?;
                Ok(grow(prior, self.adr_growth_percent(year)?))
            }
        }
    }

    /// ADR growth applied in a forecast year, as a percentage.
    pub fn adr_growth_percent(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        let store = self.context.store();
        match store.adr_method() {
            AdrGrowthMethod::Flat => {
                self.context.timeline().require_forecast(year)?;
                Ok(store.adr_flat_growth().to_decimal())
            }
            AdrGrowthMethod::PerYear => store.value(InputLine::AdrGrowth, year),
        }
    }

    /// Revenue per available room.
    pub fn revpar(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        Ok(safe_div(
            self.rooms_revenue(year)?,
            self.available_rooms(year)?,
        ))
    }

    pub fn rooms_revenue(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        match self.context.timeline().classify(year)? {
            YearKind::Historical => self
                .context
                .actuals()
                .get(ActualLine::Revenue(Department::Rooms), year),
            YearKind::Forecast => Ok(mul(self.occupied_rooms(year)?, self.adr(year)?)),
        }
    }

    fn prior_year(
        &self,
        year: Year,
    ) -> Result<Year, TimelineError> {
        self.context
            .timeline()
            .prior_year(year)
            .ok_or(TimelineError::OutOfDomain(year - 1))
    }
}
