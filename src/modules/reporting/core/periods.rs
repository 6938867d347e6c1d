use crate::shared::core::primitives::DateRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four date ranges a dashboard compares. Weeks run Monday to Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriods {
    pub current_week: DateRange,
    pub last_week: DateRange,
    pub current_month: DateRange,
    pub last_month: DateRange,
}

impl ReportingPeriods {
    pub fn for_day(today: NaiveDate) -> Self {
        let current_week = DateRange::week_of(today);
        let current_month = DateRange::month_of(today);
        Self {
            current_week,
            last_week: current_week.previous_week(),
            current_month,
            last_month: current_month.previous_month(),
        }
    }
}
