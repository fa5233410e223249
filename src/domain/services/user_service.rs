use crate::domain::model::{LogValue, User};
use crate::domain::ports::{AppLogger, UserRepository};
use crate::utils::error::Result;
use crate::utils::stopwatch::Stopwatch;
use std::sync::Arc;
use uuid::Uuid;

const GET_ALL_STARTED: &str = "Retrieving all users";
const GET_ALL_COMPLETED: &str = "All users retrieved in {0}ms";
const GET_ALL_FAILED: &str = "Something went wrong while retrieving all users";

const GET_BY_ID_STARTED: &str = "Retrieving user with id: {0}";
const GET_BY_ID_COMPLETED: &str = "User with id {0} retrieved in {1}ms";
const GET_BY_ID_FAILED: &str = "Something went wrong while retrieving user with id {0}";

const CREATE_STARTED: &str = "Creating user with id {0} and name: {1}";
const CREATE_COMPLETED: &str = "User with id {0} created in {1}ms";
const CREATE_FAILED: &str = "Something went wrong while creating a user";

const DELETE_STARTED: &str = "Deleting user with id: {0}";
const DELETE_COMPLETED: &str = "User with id {0} deleted in {1}ms";
const DELETE_FAILED: &str = "Something went wrong while deleting user with id {0}";

/// Instrumented front for a `UserRepository`.
///
/// Every operation logs a start record, times the repository call, then logs
/// either a completion record carrying the elapsed milliseconds or a single
/// error record. Results and errors from the repository are returned as-is.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    logger: Arc<dyn AppLogger>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, logger: Arc<dyn AppLogger>) -> Self {
        Self { repository, logger }
    }

    pub async fn get_all(&self) -> Result<Vec<User>> {
        self.logger.log_information(GET_ALL_STARTED, &[]);

        let stopwatch = Stopwatch::start_new();
        match self.repository.get_all().await {
            Ok(users) => {
                let elapsed = stopwatch.elapsed_ms();
                self.logger
                    .log_information(GET_ALL_COMPLETED, &[LogValue::Millis(elapsed)]);
                Ok(users)
            }
            Err(e) => {
                self.logger.log_error(&e, GET_ALL_FAILED, &[]);
                Err(e)
            }
        }
    }

    /// `Ok(None)` means no user has this id; it is not a failure.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.logger
            .log_information(GET_BY_ID_STARTED, &[LogValue::Id(id)]);

        let stopwatch = Stopwatch::start_new();
        match self.repository.get_by_id(id).await {
            Ok(user) => {
                let elapsed = stopwatch.elapsed_ms();
                self.logger.log_information(
                    GET_BY_ID_COMPLETED,
                    &[LogValue::Id(id), LogValue::Millis(elapsed)],
                );
                Ok(user)
            }
            Err(e) => {
                self.logger
                    .log_error(&e, GET_BY_ID_FAILED, &[LogValue::Id(id)]);
                Err(e)
            }
        }
    }

    pub async fn create(&self, user: &User) -> Result<bool> {
        self.logger.log_information(
            CREATE_STARTED,
            &[LogValue::Id(user.id), LogValue::Text(user.full_name.clone())],
        );

        let stopwatch = Stopwatch::start_new();
        match self.repository.create(user).await {
            Ok(created) => {
                let elapsed = stopwatch.elapsed_ms();
                self.logger.log_information(
                    CREATE_COMPLETED,
                    &[LogValue::Id(user.id), LogValue::Millis(elapsed)],
                );
                Ok(created)
            }
            Err(e) => {
                self.logger.log_error(&e, CREATE_FAILED, &[]);
                Err(e)
            }
        }
    }

    /// Returns the repository's flag verbatim: `false` when no row was removed.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        self.logger
            .log_information(DELETE_STARTED, &[LogValue::Id(id)]);

        let stopwatch = Stopwatch::start_new();
        match self.repository.delete_by_id(id).await {
            Ok(deleted) => {
                let elapsed = stopwatch.elapsed_ms();
                self.logger.log_information(
                    DELETE_COMPLETED,
                    &[LogValue::Id(id), LogValue::Millis(elapsed)],
                );
                Ok(deleted)
            }
            Err(e) => {
                self.logger
                    .log_error(&e, DELETE_FAILED, &[LogValue::Id(id)]);
                Err(e)
            }
        }
    }
}
