pub mod api_error;
pub mod commands;
pub mod job_group;
