pub mod income;
pub mod profile;
pub mod report;
pub mod saving;
pub mod schedule;
pub mod session;
pub mod settings;
