use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDashboard {
    pub user_id: String,
    /// The day the periods are anchored on, in the same calendar the logs are stored in.
    pub today: NaiveDate,
}
