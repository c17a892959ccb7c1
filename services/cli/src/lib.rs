mod cli;
mod commands;
mod infra;
mod render;

use pocketcalc::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
