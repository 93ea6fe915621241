//! Customer CRUD CLI - database migrations and manager accounts.
//!
//! # Usage
//!
//! ```bash
//! # Apply crates/server/migrations
//! crud-cli migrate
//!
//! # Create a manager for the basic-auth protected routes
//! crud-cli manager create --login admin --password 's3cret'
//! ```
//!
//! Both commands read `CUSTOMERS_DATABASE_URL` (or `DATABASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "crud-cli")]
#[command(author, version, about = "Customer CRUD CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage manager accounts
    Manager {
        #[command(subcommand)]
        action: ManagerAction,
    },
}

#[derive(Subcommand)]
enum ManagerAction {
    /// Create a new manager
    Create {
        /// Basic-auth login
        #[arg(short, long)]
        login: String,

        /// Basic-auth password, stored as given
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Manager { action } => match action {
            ManagerAction::Create { login, password } => {
                let id = commands::manager::create(&login, &password).await?;
                tracing::info!(manager_id = %id, login = %login, "Manager created");
            }
        },
    }
    Ok(())
}
