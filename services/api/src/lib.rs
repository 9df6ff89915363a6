mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use vot_romania::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
