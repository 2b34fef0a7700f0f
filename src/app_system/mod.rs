//! System orchestration, configuration, tracing setup, startup and shutdown.

pub mod config;
pub mod order_system;
pub mod telemetry;

pub use config::*;
pub use order_system::*;
pub use telemetry::*;
