pub mod adapters;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{InMemoryUserRepository, JsonFileUserRepository, RecordingLogger, TracingLogger};
pub use config::ServiceConfig;
pub use domain::model::{LogValue, User};
pub use domain::ports::{AppLogger, UserRepository};
pub use domain::services::UserService;
pub use utils::error::{RepositoryError, Result};
