use crate::domain::model::{render_template, LogValue};
use crate::domain::ports::AppLogger;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Information,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub template: &'static str,
    pub args: Vec<LogValue>,
    /// Display form of the attached error, for error-level records.
    pub error: Option<String>,
    /// Debug form of the attached error; keeps the variant visible.
    pub error_debug: Option<String>,
}

impl LogRecord {
    pub fn rendered(&self) -> String {
        render_template(self.template, &self.args)
    }
}

/// In-memory `AppLogger` that keeps every record in emission order.
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn information(&self) -> Vec<LogRecord> {
        self.by_level(LogLevel::Information)
    }

    pub fn errors(&self) -> Vec<LogRecord> {
        self.by_level(LogLevel::Error)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn by_level(&self, level: LogLevel) -> Vec<LogRecord> {
        self.lock()
            .iter()
            .filter(|record| record.level == level)
            .cloned()
            .collect()
    }
}

impl AppLogger for RecordingLogger {
    fn log_information(&self, template: &'static str, args: &[LogValue]) {
        self.lock().push(LogRecord {
            level: LogLevel::Information,
            template,
            args: args.to_vec(),
            error: None,
            error_debug: None,
        });
    }

    fn log_error(
        &self,
        error: &(dyn std::error::Error + 'static),
        template: &'static str,
        args: &[LogValue],
    ) {
        self.lock().push(LogRecord {
            level: LogLevel::Error,
            template,
            args: args.to_vec(),
            error: Some(error.to_string()),
            error_debug: Some(format!("{:?}", error)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RepositoryError;

    #[test]
    fn test_records_keep_emission_order_and_share_buffer() {
        let logger = RecordingLogger::new();
        let shared = logger.clone();

        logger.log_information("first {0}", &[LogValue::Millis(1)]);
        let err = RepositoryError::database("boom");
        shared.log_error(&err, "second", &[]);

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, LogLevel::Information);
        assert_eq!(records[0].rendered(), "first 1");
        assert_eq!(records[1].level, LogLevel::Error);
        assert_eq!(records[1].error.as_deref(), Some("boom"));
        assert_eq!(
            records[1].error_debug.as_deref(),
            Some("Database { message: \"boom\" }")
        );
        assert_eq!(records[0].error_debug, None);

        assert_eq!(logger.information().len(), 1);
        assert_eq!(logger.errors().len(), 1);

        shared.clear();
        assert!(logger.records().is_empty());
    }
}
