use crate::modules::profiles::core::profile::UserProfile;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileQueries {
    /// `None` until the user has saved a profile.
    async fn find_by_user_id(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>>;
}
