pub mod error;
pub mod logger;
pub mod stopwatch;
pub mod validation;
