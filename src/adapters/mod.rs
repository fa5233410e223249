// Adapters layer: concrete implementations of the domain ports.

pub mod json_file;
pub mod memory;
pub mod recording_logger;
pub mod tracing_logger;

pub use json_file::JsonFileUserRepository;
pub use memory::InMemoryUserRepository;
pub use recording_logger::{LogLevel, LogRecord, RecordingLogger};
pub use tracing_logger::TracingLogger;
