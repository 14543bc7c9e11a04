pub mod income_service;
pub mod rate_service;
pub mod report_service;
pub mod sync_service;
