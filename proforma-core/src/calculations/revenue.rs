//! Revenue Engine.
//!
//! Rooms revenue comes from the [`DemandEngine`]. Every other department is
//! forecast as a per-occupied-room rate. Historical years read actuals.

use rust_decimal::Decimal;

use super::common::{mul, safe_div, sum};
use super::context::ProjectionContext;
use super::demand::DemandEngine;
use crate::models::{ActualLine, Department, InputLine, TimelineError, Year, YearKind};

#[derive(Clone, Copy)]
pub struct RevenueEngine<'a> {
    context: ProjectionContext<'a>,
    demand: DemandEngine<'a>,
}

impl<'a> RevenueEngine<'a> {
    pub fn new(context: ProjectionContext<'a>) -> Self {
        Self {
            context,
            demand: DemandEngine::new(context),
        }
    }

    pub fn demand(&self) -> &DemandEngine<'a> {
        &self.demand
    }

    /// Revenue of one department.
    pub fn department(
        &self,
        department: Department,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        if department == Department::Rooms {
            return self.demand.rooms_revenue(year);
        }
        match self.context.timeline().classify(year)? {
            YearKind::Historical => self
                .context
                .actuals()
                .get(ActualLine::Revenue(department), year),
            YearKind::Forecast => {
                let rate = self
                    .context
                    .store()
                    .value(InputLine::DepartmentRate(department), year)?;
                Ok(mul(rate, self.demand.occupied_rooms(year)?))
            }
        }
    }

    /// Sum of every department, historical or forecast alike.
    pub fn total(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        let revenues = Department::ALL
            .iter()
            .map(|department| self.department(*department, year));
        sum(revenues)
    }

    /// A department's revenue per occupied room.
    ///
    /// Historical years derive it from the actual. Forecast years show the
    /// entered rate. Rooms answers with ADR.
    pub fn display_rate(
        &self,
        department: Department,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        if department == Department::Rooms {
            return self.demand.adr(year);
        }
        match self.context.timeline().classify(year)? {
            YearKind::Historical => Ok(safe_div(
                self.department(department, year)?,
                self.demand.occupied_rooms(year)?,
            )),
            YearKind::Forecast => self
                .context
                .store()
                .value(InputLine::DepartmentRate(department), year),
        }
    }
}
