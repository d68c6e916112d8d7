//! Identifiers for every line of the operating statement.
//!
//! Each identifier has a stable lowercase key (`as_str`/`parse`) used by
//! input files and reports.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A revenue-producing department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Rooms,
    FoodAndBeverage,
    ResortFee,
    OtherOperated,
    Miscellaneous,
    Allocated,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Self::Rooms,
        Self::FoodAndBeverage,
        Self::ResortFee,
        Self::OtherOperated,
        Self::Miscellaneous,
        Self::Allocated,
    ];

    /// Departments forecast from a per-occupied-room rate.
    pub const NON_ROOMS: [Department; 5] = [
        Self::FoodAndBeverage,
        Self::ResortFee,
        Self::OtherOperated,
        Self::Miscellaneous,
        Self::Allocated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::FoodAndBeverage => "food_beverage",
            Self::ResortFee => "resort_fee",
            Self::OtherOperated => "other_operated",
            Self::Miscellaneous => "miscellaneous",
            Self::Allocated => "allocated",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rooms => "Rooms",
            Self::FoodAndBeverage => "Food & Beverage",
            Self::ResortFee => "Resort Fee",
            Self::OtherOperated => "Other Operated",
            Self::Miscellaneous => "Miscellaneous",
            Self::Allocated => "Allocated",
        }
    }
}

/// The rollup an expense line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Rooms,
    OtherOperated,
    Undistributed,
    NonOperating,
}

/// An expense line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseLine {
    Rooms,
    FoodAndBeverage,
    OtherOperated,
    Miscellaneous,
    Allocated,
    AdminGeneral,
    InformationTechnology,
    SalesMarketing,
    PropertyOperations,
    Utilities,
    ManagementFees,
    RealEstateTaxes,
    Insurance,
    OtherNonOperating,
}

impl ExpenseLine {
    pub const ALL: [ExpenseLine; 14] = [
        Self::Rooms,
        Self::FoodAndBeverage,
        Self::OtherOperated,
        Self::Miscellaneous,
        Self::Allocated,
        Self::AdminGeneral,
        Self::InformationTechnology,
        Self::SalesMarketing,
        Self::PropertyOperations,
        Self::Utilities,
        Self::ManagementFees,
        Self::RealEstateTaxes,
        Self::Insurance,
        Self::OtherNonOperating,
    ];

    pub const OTHER_OPERATED: [ExpenseLine; 4] = [
        Self::FoodAndBeverage,
        Self::OtherOperated,
        Self::Miscellaneous,
        Self::Allocated,
    ];

    pub const UNDISTRIBUTED: [ExpenseLine; 5] = [
        Self::AdminGeneral,
        Self::InformationTechnology,
        Self::SalesMarketing,
        Self::PropertyOperations,
        Self::Utilities,
    ];

    pub const NON_OPERATING: [ExpenseLine; 4] = [
        Self::ManagementFees,
        Self::RealEstateTaxes,
        Self::Insurance,
        Self::OtherNonOperating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::FoodAndBeverage => "food_beverage",
            Self::OtherOperated => "other_operated",
            Self::Miscellaneous => "miscellaneous",
            Self::Allocated => "allocated",
            Self::AdminGeneral => "admin_general",
            Self::InformationTechnology => "information_technology",
            Self::SalesMarketing => "sales_marketing",
            Self::PropertyOperations => "property_operations",
            Self::Utilities => "utilities",
            Self::ManagementFees => "management_fees",
            Self::RealEstateTaxes => "real_estate_taxes",
            Self::Insurance => "insurance",
            Self::OtherNonOperating => "other_non_operating",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|line| line.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rooms => "Rooms Expense",
            Self::FoodAndBeverage => "Food & Beverage Expense",
            Self::OtherOperated => "Other Operated Expense",
            Self::Miscellaneous => "Miscellaneous Expense",
            Self::Allocated => "Allocated Expense",
            Self::AdminGeneral => "Administrative & General",
            Self::InformationTechnology => "Information & Telecom",
            Self::SalesMarketing => "Sales & Marketing",
            Self::PropertyOperations => "Property Operations & Maintenance",
            Self::Utilities => "Utilities",
            Self::ManagementFees => "Management Fees",
            Self::RealEstateTaxes => "Real Estate Taxes",
            Self::Insurance => "Insurance",
            Self::OtherNonOperating => "Other Non-Operating",
        }
    }

    pub fn category(&self) -> ExpenseCategory {
        match self {
            Self::Rooms => ExpenseCategory::Rooms,
            Self::FoodAndBeverage | Self::OtherOperated | Self::Miscellaneous | Self::Allocated => {
                ExpenseCategory::OtherOperated
            }
            Self::AdminGeneral
            | Self::InformationTechnology
            | Self::SalesMarketing
            | Self::PropertyOperations
            | Self::Utilities => ExpenseCategory::Undistributed,
            Self::ManagementFees
            | Self::RealEstateTaxes
            | Self::Insurance
            | Self::OtherNonOperating => ExpenseCategory::NonOperating,
        }
    }

    /// The department whose revenue a percent-of-revenue input refers to.
    ///
    /// `None` means the line is priced against total revenue.
    pub fn department(&self) -> Option<Department> {
        match self {
            Self::Rooms => Some(Department::Rooms),
            Self::FoodAndBeverage => Some(Department::FoodAndBeverage),
            Self::OtherOperated => Some(Department::OtherOperated),
            Self::Miscellaneous => Some(Department::Miscellaneous),
            Self::Allocated => Some(Department::Allocated),
            _ => None,
        }
    }

    /// Method a freshly created input record starts with.
    pub fn default_method(&self) -> ForecastMethod {
        match self.category() {
            ExpenseCategory::NonOperating => ForecastMethod::ManualInput,
            _ => ForecastMethod::PercentOfRevenue,
        }
    }
}

/// How a forecast-year expense value is derived from its raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ForecastMethod {
    /// Raw input is dollars per occupied room-night.
    PerOccupiedRoom,
    /// Raw input is a percentage of the reference revenue.
    PercentOfRevenue,
    /// Raw input is the dollar amount.
    ManualInput,
}

impl ForecastMethod {
    pub const ALL: [ForecastMethod; 3] = [
        Self::PerOccupiedRoom,
        Self::PercentOfRevenue,
        Self::ManualInput,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerOccupiedRoom => "por",
            Self::PercentOfRevenue => "percent_of_revenue",
            Self::ManualInput => "manual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PerOccupiedRoom => "POR",
            Self::PercentOfRevenue => "% of Revenue",
            Self::ManualInput => "Manual",
        }
    }
}

/// How forecast occupancy is entered. One switch covers every forecast year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupancyMethod {
    /// Occupancy percent entered per year.
    #[default]
    Direct,
    /// Growth percent applied to the prior year's occupancy.
    YearOverYearGrowth,
}

impl OccupancyMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::YearOverYearGrowth => "growth",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "direct" => Some(Self::Direct),
            "growth" => Some(Self::YearOverYearGrowth),
            _ => None,
        }
    }
}

/// How forecast ADR growth is entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdrGrowthMethod {
    /// One growth rate for every forecast year.
    #[default]
    Flat,
    /// A growth rate per forecast year.
    PerYear,
}

impl AdrGrowthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::PerYear => "per_year",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "flat" => Some(Self::Flat),
            "per_year" => Some(Self::PerYear),
            _ => None,
        }
    }
}

/// A per-year input series held by the line-item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InputLine {
    Occupancy,
    OccupancyGrowth,
    AdrGrowth,
    /// Per-occupied-room rate of a non-rooms department.
    DepartmentRate(Department),
    /// An expense line; the series is chosen by [`ForecastMethod`].
    Expense(ExpenseLine),
}

impl InputLine {
    /// Key such as `occupancy`, `revenue.food_beverage` or `expense.rooms`.
    pub fn key(&self) -> String {
        match self {
            Self::Occupancy => "occupancy".to_string(),
            Self::OccupancyGrowth => "occupancy_growth".to_string(),
            Self::AdrGrowth => "adr_growth".to_string(),
            Self::DepartmentRate(department) => format!("revenue.{}", department.as_str()),
            Self::Expense(line) => format!("expense.{}", line.as_str()),
        }
    }

    /// Parses a key. Rooms revenue has no rate input and is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "occupancy" => return Some(Self::Occupancy),
            "occupancy_growth" => return Some(Self::OccupancyGrowth),
            "adr_growth" => return Some(Self::AdrGrowth),
            _ => {}
        }
        if let Some(rest) = s.strip_prefix("revenue.") {
            return Department::parse(rest)
                .filter(|d| *d != Department::Rooms)
                .map(Self::DepartmentRate);
        }
        s.strip_prefix("expense.")
            .and_then(ExpenseLine::parse)
            .map(Self::Expense)
    }
}

impl fmt::Display for InputLine {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// A line recorded in the historical actuals table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActualLine {
    /// Occupancy percent, e.g. `72.5`.
    Occupancy,
    Revenue(Department),
    Expense(ExpenseLine),
}

impl ActualLine {
    /// Key such as `occupancy`, `revenue.rooms` or `expense.utilities`.
    pub fn key(&self) -> String {
        match self {
            Self::Occupancy => "occupancy".to_string(),
            Self::Revenue(department) => format!("revenue.{}", department.as_str()),
            Self::Expense(line) => format!("expense.{}", line.as_str()),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        if s == "occupancy" {
            return Some(Self::Occupancy);
        }
        if let Some(rest) = s.strip_prefix("revenue.") {
            return Department::parse(rest).map(Self::Revenue);
        }
        s.strip_prefix("expense.")
            .and_then(ExpenseLine::parse)
            .map(Self::Expense)
    }
}

impl fmt::Display for ActualLine {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn department_keys_round_trip() {
        for department in Department::ALL {
            assert_eq!(Department::parse(department.as_str()), Some(department));
        }
        assert_eq!(Department::parse("spa"), None);
    }

    #[test]
    fn expense_line_keys_round_trip() {
        for line in ExpenseLine::ALL {
            assert_eq!(ExpenseLine::parse(line.as_str()), Some(line));
        }
    }

    #[test]
    fn rollup_groups_partition_non_rooms_lines() {
        let grouped: Vec<ExpenseLine> = ExpenseLine::OTHER_OPERATED
            .into_iter()
            .chain(ExpenseLine::UNDISTRIBUTED)
            .chain(ExpenseLine::NON_OPERATING)
            .collect();

        assert_eq!(grouped.len() + 1, ExpenseLine::ALL.len());
        assert!(!grouped.contains(&ExpenseLine::Rooms));
        for line in ExpenseLine::ALL {
            assert!(line == ExpenseLine::Rooms || grouped.contains(&line));
        }
    }

    #[test]
    fn departmental_expenses_link_to_their_own_revenue() {
        assert_eq!(
            ExpenseLine::FoodAndBeverage.department(),
            Some(Department::FoodAndBeverage)
        );
        assert_eq!(
            ExpenseLine::OtherOperated.department(),
            Some(Department::OtherOperated)
        );
        assert_eq!(
            ExpenseLine::Miscellaneous.department(),
            Some(Department::Miscellaneous)
        );
        assert_eq!(ExpenseLine::Rooms.department(), Some(Department::Rooms));
    }

    #[test]
    fn overhead_expenses_have_no_department() {
        for line in ExpenseLine::UNDISTRIBUTED
            .into_iter()
            .chain(ExpenseLine::NON_OPERATING)
        {
            assert_eq!(line.department(), None, "{line:?}");
        }
    }

    #[test]
    fn forecast_method_parses_keys() {
        assert_eq!(ForecastMethod::parse("por"), Some(ForecastMethod::PerOccupiedRoom));
        assert_eq!(
            ForecastMethod::parse("percent_of_revenue"),
            Some(ForecastMethod::PercentOfRevenue)
        );
        assert_eq!(ForecastMethod::parse("manual"), Some(ForecastMethod::ManualInput));
        assert_eq!(ForecastMethod::parse("POR"), None);
    }

    #[test]
    fn input_line_keys_round_trip() {
        let lines = [
            InputLine::Occupancy,
            InputLine::OccupancyGrowth,
            InputLine::AdrGrowth,
            InputLine::DepartmentRate(Department::FoodAndBeverage),
            InputLine::Expense(ExpenseLine::Utilities),
        ];

        for line in lines {
            assert_eq!(InputLine::parse(&line.key()), Some(line));
        }
    }

    #[test]
    fn input_line_rejects_rooms_revenue_rate() {
        assert_eq!(InputLine::parse("revenue.rooms"), None);
        assert_eq!(InputLine::parse("expense.spa"), None);
        assert_eq!(InputLine::parse(""), None);
    }

    #[test]
    fn actual_line_accepts_rooms_revenue() {
        assert_eq!(
            ActualLine::parse("revenue.rooms"),
            Some(ActualLine::Revenue(Department::Rooms))
        );
        assert_eq!(ActualLine::parse("occupancy"), Some(ActualLine::Occupancy));
        assert_eq!(
            ActualLine::Expense(ExpenseLine::Insurance).to_string(),
            "expense.insurance"
        );
    }
}
