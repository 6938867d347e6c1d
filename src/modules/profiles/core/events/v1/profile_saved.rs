use crate::modules::profiles::core::profile::{Currency, TimeFormat};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct ProfileSavedV1 {
    pub user_id: String,
    pub default_wage: Option<f64>,
    pub currency: Currency,
    pub time_format: TimeFormat,
    pub saved_at: i64,
}
