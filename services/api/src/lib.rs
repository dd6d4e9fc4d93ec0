mod cli;
mod infra;
mod routes;
mod score;
mod server;

use receipt_rewards::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
