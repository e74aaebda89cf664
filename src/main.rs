use anyhow::Result;
use medibot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
