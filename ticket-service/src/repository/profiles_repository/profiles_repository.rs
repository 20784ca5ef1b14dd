use crate::repository::{Error, Profile};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfilesRepository: Send + Sync {
    async fn find_profile(&self, user_id: i64) -> Result<Option<Profile>, Error>;
}
