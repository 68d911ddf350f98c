// Dashboard Host
// Seed data, configuration, and the snapshot surface the renderer consumes

pub mod config;
pub mod market;
pub mod seed;
pub mod snapshot;

pub use config::DashboardConfig;
pub use snapshot::DashboardSnapshot;
