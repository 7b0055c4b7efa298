use crate::application_port::{AvatarSource, Registration, UserError, UserService};
use crate::domain_model::{User, UserId};
use crate::domain_port::{UserRecord, UserRepo};
use crate::logger::*;
use std::sync::Arc;

pub struct RealUserService {
    user_repo: Arc<dyn UserRepo>,
    avatar_source: Arc<dyn AvatarSource>,
}

impl RealUserService {
    pub fn new(
        user_repo: Arc<dyn UserRepo>,
        avatar_source: Arc<dyn AvatarSource>,
    ) -> RealUserService {
        RealUserService {
            user_repo,
            avatar_source,
        }
    }

    async fn decorate(&self, record: UserRecord) -> User {
        User {
            id: record.user_id,
            name: record.username,
            image: self.avatar_source.fetch_image_url().await,
        }
    }
}

#[async_trait::async_trait]
impl UserService for RealUserService {
    // Check-then-insert without a unique index: concurrent registrations of
    // the same name may both insert.
    async fn register(&self, name: &str) -> Result<Registration, UserError> {
        let (record, created) = match self.user_repo.find_by_name(name).await {
            Ok(existing) => (existing, false),
            Err(UserError::NotFound) => {
                let record = UserRecord {
                    user_id: UserId::generate(),
                    username: name.to_string(),
                };
                self.user_repo.insert(&record).await?;
                (record, true)
            }
            Err(e) => return Err(e),
        };

        debug!(user_id = %record.user_id, created, "user registered");
        Ok(Registration {
            user: self.decorate(record).await,
            created,
        })
    }

    async fn find_by_name(&self, name: &str) -> Result<User, UserError> {
        let record = self.user_repo.find_by_name(name).await?;
        Ok(self.decorate(record).await)
    }
}
