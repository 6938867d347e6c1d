use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date range. Dates carry no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Monday through Sunday of the week holding `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_monday());
        let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
        let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// First through last day of the calendar month holding `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date
            .checked_sub_days(Days::new(u64::from(date.day0())))
            .unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn previous_week(&self) -> Self {
        let anchor = self.start.checked_sub_days(Days::new(7)).unwrap_or(self.start);
        Self::week_of(anchor)
    }

    pub fn previous_month(&self) -> Self {
        let anchor = self.start.pred_opt().unwrap_or(self.start);
        Self::month_of(anchor)
    }
}
