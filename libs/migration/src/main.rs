//! Schema CLI for the cloud vendor store
//!
//! Reads `DATABASE_URL` and runs `up`, `down`, `status`, `fresh` or `refresh`.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
