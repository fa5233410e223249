use crate::domain::model::{LogValue, User};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn create(&self, user: &User) -> Result<bool>;
    async fn delete_by_id(&self, id: Uuid) -> Result<bool>;
}

/// Structured log sink. Templates and arguments are handed over separately;
/// rendering is the implementation's concern.
pub trait AppLogger: Send + Sync {
    fn log_information(&self, template: &'static str, args: &[LogValue]);
    fn log_error(
        &self,
        error: &(dyn std::error::Error + 'static),
        template: &'static str,
        args: &[LogValue],
    );
}
