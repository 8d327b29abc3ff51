pub mod config_helper;
pub mod duration_format;
