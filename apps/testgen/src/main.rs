mod cli;

use clap::Parser;
use std::process::ExitCode;
use testgen_config::{ApiError, TestgenError};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let api_error = match err.downcast_ref::<TestgenError>() {
                Some(err) => ApiError::from(err),
                None => ApiError::new(
                    testgen_config::error::error_codes::E1000_INTERNAL_ERROR,
                    format!("{:#}", err),
                ),
            };
            tracing::error!(code = %api_error.code, "{}", api_error.message);
            match serde_json::to_string(&api_error) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("{}", api_error),
            }
            ExitCode::FAILURE
        }
    }
}
