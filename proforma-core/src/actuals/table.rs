use rust_decimal::Decimal;

use super::provider::ActualsProvider;
use crate::models::{ActualLine, Timeline, TimelineError, Year};

/// Historical-only view over an [`ActualsProvider`].
///
/// Reads for forecast years are refused, and a missing value reads as zero.
pub struct ActualsTable<'a> {
    timeline: &'a Timeline,
    provider: &'a dyn ActualsProvider,
}

impl<'a> ActualsTable<'a> {
    pub fn new(
        timeline: &'a Timeline,
        provider: &'a dyn ActualsProvider,
    ) -> Self {
        Self { timeline, provider }
    }

    pub fn get(
        &self,
        line: ActualLine,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        self.timeline.require_historical(year)?;
        Ok(self.provider.actual(line, year).unwrap_or(Decimal::ZERO))
    }
}
