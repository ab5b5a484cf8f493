mod cli;
mod infra;
mod quote;
mod routes;
mod server;

use insurance_guide::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
