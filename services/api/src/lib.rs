mod cli;
mod infra;
mod routes;
mod server;

use traitharbor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
