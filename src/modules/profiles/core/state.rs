use crate::modules::profiles::core::profile::{Currency, TimeFormat};

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    None,
    Saved {
        user_id: String,
        default_wage: Option<f64>,
        currency: Currency,
        time_format: TimeFormat,
        saved_at: i64,
        revision: u32,
    },
}
