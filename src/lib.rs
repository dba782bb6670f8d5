pub mod cache_manager;
pub mod configuration;
pub mod error_fmt;
pub mod explorer_client;
pub mod kill_signal;
pub mod routes;
pub mod startup;
pub mod telemetry;
