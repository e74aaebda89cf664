use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod departments;
pub mod serve;

use crate::core::AppConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "2222";

#[derive(Subcommand)]
enum Command {
    /// Run the API server and chat UI
    Serve {
        /// Set the server host address
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Set the server port
        #[arg(long, default_value = DEFAULT_PORT)]
        port: String,
    },
    /// Start a chat session in the terminal
    Chat {},
    /// Print the medical departments guide
    Departments {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // A .env file is optional
    let _ = dotenvy::dotenv();

    // Handle each sub command. Without one, run the server.
    match args.command {
        Some(Command::Serve { host, port }) => {
            let config = AppConfig::from_env()?;
            serve::run(host, port, config).await?;
        }
        Some(Command::Chat {}) => {
            let config = AppConfig::from_env()?;
            chat::run(config).await?;
        }
        Some(Command::Departments {}) => {
            departments::run();
        }
        None => {
            let config = AppConfig::from_env()?;
            serve::run(DEFAULT_HOST.to_string(), DEFAULT_PORT.to_string(), config).await?;
        }
    }

    Ok(())
}
