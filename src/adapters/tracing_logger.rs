use crate::domain::model::{render_template, LogValue};
use crate::domain::ports::AppLogger;

/// `AppLogger` backed by `tracing`. The raw template and its arguments are
/// attached as event fields next to the rendered message.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl AppLogger for TracingLogger {
    fn log_information(&self, template: &'static str, args: &[LogValue]) {
        tracing::info!(
            target: "user_service",
            template,
            args = ?args,
            "{}",
            render_template(template, args)
        );
    }

    fn log_error(
        &self,
        error: &(dyn std::error::Error + 'static),
        template: &'static str,
        args: &[LogValue],
    ) {
        tracing::error!(
            target: "user_service",
            template,
            args = ?args,
            error = %error,
            "{}",
            render_template(template, args)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RepositoryError;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_json_events(emit: impl FnOnce()) -> Vec<serde_json::Value> {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, emit);

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_events_carry_template_args_and_error_fields() {
        let id = Uuid::parse_str("6f1c2a8e-0b4d-4e8a-9a53-1d2e3f4a5b6c").unwrap();
        let logger = TracingLogger::new();
        let err = RepositoryError::database("Something went wrong");

        let events = capture_json_events(|| {
            logger.log_information(
                "User with id {0} retrieved in {1}ms",
                &[LogValue::Id(id), LogValue::Millis(7)],
            );
            logger.log_error(
                &err,
                "Something went wrong while retrieving user with id {0}",
                &[LogValue::Id(id)],
            );
        });

        assert_eq!(events.len(), 2);

        let info = &events[0];
        assert_eq!(info["level"], "INFO");
        assert_eq!(info["target"], "user_service");
        assert_eq!(
            info["fields"]["message"],
            "User with id 6f1c2a8e-0b4d-4e8a-9a53-1d2e3f4a5b6c retrieved in 7ms"
        );
        assert_eq!(
            info["fields"]["template"],
            "User with id {0} retrieved in {1}ms"
        );
        let args = info["fields"]["args"].as_str().unwrap();
        assert!(args.contains("6f1c2a8e-0b4d-4e8a-9a53-1d2e3f4a5b6c"));
        assert!(args.contains("Millis(7)"));
        assert!(info["fields"].get("error").is_none());

        let error = &events[1];
        assert_eq!(error["level"], "ERROR");
        assert_eq!(
            error["fields"]["message"],
            "Something went wrong while retrieving user with id 6f1c2a8e-0b4d-4e8a-9a53-1d2e3f4a5b6c"
        );
        assert_eq!(
            error["fields"]["template"],
            "Something went wrong while retrieving user with id {0}"
        );
        assert!(error["fields"]["args"]
            .as_str()
            .unwrap()
            .contains("6f1c2a8e-0b4d-4e8a-9a53-1d2e3f4a5b6c"));
        assert_eq!(error["fields"]["error"], "Something went wrong");
    }
}
