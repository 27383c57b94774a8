pub mod configuration;
pub mod domain;
pub mod error;
pub mod identity;
pub mod probe;
pub mod scenario;
pub mod telemetry;
