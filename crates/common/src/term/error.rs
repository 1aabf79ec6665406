use crate::logger;

/// Print the full error chain the way the CLI reports fatal failures.
pub fn log_error(error: anyhow::Error) {
    logger::new_empty_line();
    logger::error(format!("{error:#}"));
    logger::outro("Command failed");
}
