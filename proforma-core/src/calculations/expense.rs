//! Expense Engine and Reserve for Replacement.
//!
//! Every expense line runs through [`evaluate`] in forecast years. In
//! historical years the line returns its actual, whatever method is active.
//! The method then only decides how [`ExpenseEngine::display_value`] presents
//! the actual.

use rust_decimal::Decimal;

use super::common::{percent_of, sum};
use super::context::ProjectionContext;
use super::method::{MethodContext, evaluate, read_back};
use super::revenue::RevenueEngine;
use crate::models::{
    ActualLine, ExpenseLine, ForecastMethod, InputLine, TimelineError, Year, YearKind,
};

#[derive(Clone, Copy)]
pub struct ExpenseEngine<'a> {
    context: ProjectionContext<'a>,
    revenue: RevenueEngine<'a>,
}

impl<'a> ExpenseEngine<'a> {
    pub fn new(context: ProjectionContext<'a>) -> Self {
        Self {
            context,
            revenue: RevenueEngine::new(context),
        }
    }

    pub fn revenue(&self) -> &RevenueEngine<'a> {
        &self.revenue
    }

    /// Revenue a percent-of-revenue input for `line` is applied to: the
    /// line's own department when it has one, total revenue otherwise.
    pub fn reference_revenue(
        &self,
        line: ExpenseLine,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        match line.department() {
            Some(department) => self.revenue.department(department, year),
            None => self.revenue.total(year),
        }
    }

    pub fn method_context(
        &self,
        line: ExpenseLine,
        year: Year,
    ) -> Result<MethodContext, TimelineError> {
        Ok(MethodContext {
            occupied_rooms: self.revenue.demand().occupied_rooms(year)?,
            reference_revenue: self.reference_revenue(line, year)?,
        })
    }

    pub fn method(
        &self,
        line: ExpenseLine,
    ) -> ForecastMethod {
        self.context.store().method(line)
    }

    /// Dollar value of an expense line.
    pub fn line(
        &self,
        line: ExpenseLine,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        match self.context.timeline().classify(year)? {
            YearKind::Historical => self.context.actuals().get(ActualLine::Expense(line), year),
            YearKind::Forecast => {
                let store = self.context.store();
                let raw = store.raw(InputLine::Expense(line), year)?;
                let context = self.method_context(line, year)?;
                Ok(evaluate(store.method(line), &raw, &context))
            }
        }
    }

    /// The line in the unit of its active method.
    ///
    /// Historical years convert the actual (per occupied room, percent of
    /// reference revenue, or dollars). Forecast years show the parsed input.
    pub fn display_value(
        &self,
        line: ExpenseLine,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        let store = self.context.store();
        match self.context.timeline().classify(year)? {
            YearKind::Historical => {
                let actual = self.line(line, year)?;
                let context = self.method_context(line, year)?;
                Ok(read_back(store.method(line), actual, &context))
            }
            YearKind::Forecast => store.value(InputLine::Expense(line), year),
        }
    }

    pub fn rooms(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        self.line(ExpenseLine::Rooms, year)
    }

    /// F&B, other operated, miscellaneous and allocated.
    pub fn total_other_operated(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        self.sum(&ExpenseLine::OTHER_OPERATED, year)
    }

    pub fn total_undistributed(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        self.sum(&ExpenseLine::UNDISTRIBUTED, year)
    }

    pub fn total_non_operating(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        self.sum(&ExpenseLine::NON_OPERATING, year)
    }

    /// Reserve for replacement: the valuation percentage of total revenue in
    /// forecast years, always zero in historical years.
    pub fn reserve_for_replacement(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        match self.context.timeline().classify(year)? {
            YearKind::Historical => Ok(Decimal::ZERO),
            YearKind::Forecast => {
                let percent = self
                    .context
                    .assumptions()
                    .valuation
                    .reserve_for_replacement_percent;
                Ok(percent_of(percent, self.revenue.total(year)?))
            }
        }
    }

    fn sum(
        &self,
        lines: &[ExpenseLine],
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        sum(lines.iter().map(|line| self.line(*line, year)))
    }
}
