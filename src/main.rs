use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{error, info};

mod error;
mod logging;
mod model;
mod protocol;
mod services;

use error::ReflexError;
use logging::LoggingOpts;
use services::classifier;

fn main() -> ExitCode {
    LoggingOpts::from_env().configure_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "reflex failed");
            eprintln!("{}", protocol::render_error(&e.to_string()));
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), ReflexError> {
    // Only the first argument counts; anything after it is ignored.
    let input = env::args_os()
        .nth(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .ok_or(ReflexError::MissingArgument)?;

    info!(input_len = input.len(), "classifying input");

    let result = classifier::classify(&input);
    let line = protocol::render_result(&result)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()?;

    Ok(())
}
