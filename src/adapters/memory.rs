use crate::domain::model::User;
use crate::domain::ports::UserRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: &User) -> Result<bool> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Ok(false);
        }
        users.insert(user.id, user.clone());
        Ok(true)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get() {
        let repository = InMemoryUserRepository::new();
        let user = User::new(Uuid::new_v4(), "Robert Bowes");

        assert!(repository.create(&user).await.unwrap());
        let found = repository.get_by_id(user.id).await.unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_create_duplicate_id_is_rejected() {
        let user = User::new(Uuid::new_v4(), "Robert Bowes");
        let repository = InMemoryUserRepository::with_users(vec![user.clone()]);

        let renamed = User::new(user.id, "Someone Else");
        assert!(!repository.create(&renamed).await.unwrap());

        let stored = repository.get_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.full_name, "Robert Bowes");
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_user_was_removed() {
        let user = User::new(Uuid::new_v4(), "Elise Blin");
        let repository = InMemoryUserRepository::with_users(vec![user.clone()]);

        assert!(repository.delete_by_id(user.id).await.unwrap());
        assert!(!repository.delete_by_id(user.id).await.unwrap());
        assert!(repository.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_miss_is_none() {
        let repository = InMemoryUserRepository::new();
        assert_eq!(repository.get_by_id(Uuid::new_v4()).await.unwrap(), None);
    }
}
