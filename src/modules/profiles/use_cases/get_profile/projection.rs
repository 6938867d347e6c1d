use crate::modules::profiles::core::profile::{Currency, TimeFormat, UserProfile};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProfileRow {
    pub user_id: String,
    pub default_wage: Option<f64>,
    pub currency: Currency,
    pub time_format: TimeFormat,
    pub updated_at: i64,
    pub last_event_id: Option<String>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            user_id: row.user_id,
            default_wage: row.default_wage,
            currency: row.currency,
            time_format: row.time_format,
        }
    }
}
