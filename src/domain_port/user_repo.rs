use crate::application_port::UserError;
use crate::domain_model::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: UserId,
    pub username: String,
}

#[async_trait::async_trait]
pub trait UserRepo: Send + Sync {
    /// Exact match on the stored name. `UserError::NotFound` when nothing matches.
    async fn find_by_name(&self, username: &str) -> Result<UserRecord, UserError>;

    /// Appends one record. Does not check for an existing name.
    async fn insert(&self, record: &UserRecord) -> Result<(), UserError>;
}
