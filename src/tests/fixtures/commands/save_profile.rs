// Shared test fixture for the SaveProfile command.

use crate::modules::profiles::core::profile::{Currency, TimeFormat};
use crate::modules::profiles::use_cases::save_profile::command::SaveProfile;

pub struct SaveProfileBuilder {
    inner: SaveProfile,
}

impl Default for SaveProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SaveProfileBuilder {
    pub fn new() -> Self {
        Self {
            inner: SaveProfile {
                user_id: "user-fixed-0001".to_string(),
                default_wage: Some(20.0),
                currency: Currency::Gbp,
                time_format: TimeFormat::TwentyFourHour,
                saved_at: 1_700_000_000_000,
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn default_wage(mut self, v: Option<f64>) -> Self {
        self.inner.default_wage = v;
        self
    }

    pub fn currency(mut self, v: Currency) -> Self {
        self.inner.currency = v;
        self
    }

    pub fn time_format(mut self, v: TimeFormat) -> Self {
        self.inner.time_format = v;
        self
    }

    pub fn saved_at(mut self, v: i64) -> Self {
        self.inner.saved_at = v;
        self
    }

    pub fn build(self) -> SaveProfile {
        self.inner
    }
}
