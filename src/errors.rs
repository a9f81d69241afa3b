use std::process::ExitCode;

use log::error;

/// Reports a failure at the process boundary, and gives the exit code to leave with.
pub fn report_error<T>(error_type: &'static str, a: T) -> ExitCode
where
    T: std::fmt::Display,
{
    error!("{} {}", error_type, a);
    eprintln!("error: {} {}", error_type, a);
    ExitCode::FAILURE
}

pub fn handle_error<T, E>(error_type: &'static str, a: Result<T, E>) -> Result<T, ExitCode>
where
    E: std::fmt::Display,
{
    a.map_err(|e| report_error(error_type, e))
}
