use crate::modules::profiles::core::profile::{Currency, TimeFormat};

#[derive(Debug, Clone, PartialEq)]
pub struct SaveProfile {
    pub user_id: String,
    pub default_wage: Option<f64>,
    pub currency: Currency,
    pub time_format: TimeFormat,
    pub saved_at: i64,
}
