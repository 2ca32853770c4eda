pub mod api;
pub mod cases;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
