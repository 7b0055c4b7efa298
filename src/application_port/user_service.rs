use crate::domain_model::User;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Store(String),
}

/// Outcome of a registration request.
///
/// `created` is false when a user with the same name was already stored and
/// returned as-is.
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub created: bool,
}

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Returns the user stored under `name`, creating it first when missing.
    async fn register(&self, name: &str) -> Result<Registration, UserError>;

    async fn find_by_name(&self, name: &str) -> Result<User, UserError>;
}
