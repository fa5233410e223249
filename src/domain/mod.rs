// Domain layer: the User model, the ports it is persisted and logged through,
// and the instrumented service composed over those ports.

pub mod model;
pub mod ports;

pub mod services;
