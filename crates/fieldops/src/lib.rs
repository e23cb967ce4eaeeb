pub mod api;
pub mod config;
pub mod crews;
pub mod customers;
pub mod jobs;
pub mod lookup;
pub mod projection;
pub mod seed;
pub mod telemetry;
