use crate::domain::model::User;
use crate::domain::ports::UserRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Users persisted as a single JSON array. A missing file is an empty store.
///
/// Writes replace the file through a sibling `.tmp` file. Every access holds
/// `file_lock`: shared for reads, exclusive for read-modify-write.
#[derive(Debug)]
pub struct JsonFileUserRepository {
    path: PathBuf,
    file_lock: RwLock<()>,
}

impl JsonFileUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: RwLock::new(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        PathBuf::from(temp)
    }

    async fn load(&self) -> Result<Vec<User>> {
        match tokio::fs::read(&self.path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), self.path.display());
                Ok(serde_json::from_slice(&data)?)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, users: &[User]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec_pretty(users)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &data).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        tracing::debug!("Wrote {} users to {}", users.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl UserRepository for JsonFileUserRepository {
    async fn get_all(&self) -> Result<Vec<User>> {
        let _guard = self.file_lock.read().await;
        self.load().await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let _guard = self.file_lock.read().await;
        let users = self.load().await?;
        Ok(users.into_iter().find(|user| user.id == id))
    }

    async fn create(&self, user: &User) -> Result<bool> {
        let _guard = self.file_lock.write().await;
        let mut users = self.load().await?;
        if users.iter().any(|existing| existing.id == user.id) {
            return Ok(false);
        }
        users.push(user.clone());
        self.store(&users).await?;
        Ok(true)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let _guard = self.file_lock.write().await;
        let mut users = self.load().await?;
        let before = users.len();
        users.retain(|user| user.id != id);
        if users.len() == before {
            return Ok(false);
        }
        self.store(&users).await?;
        Ok(true)
    }
}
