use crate::application_port::UserError;
use crate::domain_model::UserId;
use crate::domain_port::*;
use dashmap::DashMap;

/// Process-local user store with the same lookup semantics as the document store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    records: DashMap<UserId, UserRecord>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[async_trait::async_trait]
impl UserRepo for InMemoryUserRepo {
    async fn find_by_name(&self, username: &str) -> Result<UserRecord, UserError> {
        self.records
            .iter()
            .find(|entry| entry.value().username == username)
            .map(|entry| entry.value().clone())
            .ok_or(UserError::NotFound)
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), UserError> {
        self.records.insert(record.user_id, record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> UserRecord {
        UserRecord {
            user_id: UserId::generate(),
            username: name.to_string(),
        }
    }

    #[tokio::test]
    async fn finds_by_exact_name() {
        let repo = InMemoryUserRepo::new();
        let alice = record("alice");
        repo.insert(&alice).await.unwrap();

        assert_eq!(repo.find_by_name("alice").await.unwrap(), alice);
        assert!(matches!(
            repo.find_by_name("Alice").await,
            Err(UserError::NotFound)
        ));
        assert!(matches!(repo.find_by_name("").await, Err(UserError::NotFound)));
    }

    #[tokio::test]
    async fn insert_does_not_deduplicate_names() {
        let repo = InMemoryUserRepo::new();
        repo.insert(&record("alice")).await.unwrap();
        repo.insert(&record("alice")).await.unwrap();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_name("alice").await.unwrap().username, "alice");
    }
}
