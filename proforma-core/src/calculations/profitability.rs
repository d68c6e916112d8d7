//! Profitability Rollup: the bottom of the operating statement.
//!
//! Non-operating expense stays out of gross operating profit and comes off
//! in EBITDA.

use rust_decimal::Decimal;

use super::common::{sub, sum};
use super::context::ProjectionContext;
use super::demand::DemandEngine;
use super::expense::ExpenseEngine;
use super::revenue::RevenueEngine;
use crate::models::{TimelineError, Year};

/// Top of the engine stack. Holds the expense engine, which in turn holds
/// the revenue and demand engines.
#[derive(Clone, Copy)]
pub struct ProfitabilityRollup<'a> {
    expense: ExpenseEngine<'a>,
}

impl<'a> ProfitabilityRollup<'a> {
    pub fn new(context: ProjectionContext<'a>) -> Self {
        Self {
            expense: ExpenseEngine::new(context),
        }
    }

    pub fn expense(&self) -> &ExpenseEngine<'a> {
        &self.expense
    }

    pub fn revenue(&self) -> &RevenueEngine<'a> {
        self.expense.revenue()
    }

    pub fn demand(&self) -> &DemandEngine<'a> {
        self.expense.revenue().demand()
    }

    /// Rooms, other operated, undistributed and non-operating expense.
    pub fn total_expense(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        sum([
            self.expense.rooms(year),
            self.expense.total_other_operated(year),
            self.expense.total_undistributed(year),
            self.expense.total_non_operating(year),
        ])
    }

    pub fn gross_operating_profit(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        let operated = sum([
            self.expense.rooms(year),
            self.expense.total_other_operated(year),
            self.expense.total_undistributed(year),
        ])?;
        Ok(sub(self.revenue().total(year)?, operated))
    }

    /// Total revenue less total expense.
    pub fn ebitda(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        Ok(sub(self.revenue().total(year)?, self.total_expense(year)?))
    }

    pub fn net_operating_income(
        &self,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        Ok(sub(
            self.ebitda(year)?,
            self.expense.reserve_for_replacement(year)?,
        ))
    }
}
