use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::profiles::core::profile::UserProfile;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlUserProfile {
    pub user_id: String,
    pub default_wage: Option<f64>,
    pub currency: String,
    pub currency_symbol: String,
    pub time_format: String,
}

impl From<UserProfile> for GqlUserProfile {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            default_wage: profile.default_wage,
            currency: profile.currency.code().to_string(),
            currency_symbol: profile.currency.symbol().to_string(),
            time_format: profile.time_format.code().to_string(),
        }
    }
}

#[derive(Default)]
pub struct ProfileQuery;

#[Object]
impl ProfileQuery {
    async fn profile(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<Option<GqlUserProfile>> {
        let state = context.data_unchecked::<AppState>();
        let profile = state.profile_queries.find_by_user_id(&user_id).await?;
        Ok(profile.map(Into::into))
    }
}
