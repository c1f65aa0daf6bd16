pub mod calendar_service;
pub mod reference_time;
