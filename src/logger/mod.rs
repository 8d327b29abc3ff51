pub mod console_reporter;
pub mod csv_reporter;
