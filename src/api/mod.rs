mod cli;
mod infra;
mod routes;
mod server;

pub use routes::case_router;

use crate::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
