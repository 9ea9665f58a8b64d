//! User Service - exercises the controller/service/repository chain.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "Layered user record store over in-memory storage")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save two users through the controller and show the store after each
    Demo,
    /// Save JSON documents in order and print the stored record
    Save {
        /// JSON documents, e.g. '{"id":1,"name":"John Doe"}'
        #[arg(required = true)]
        records: Vec<String>,
    },
}

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UserServiceConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config.service.log_level);
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Demo => user_service_lib::run_demo(&config),
        Commands::Save { records } => {
            user_service_lib::run_save(&config, &records).map(|stored| match stored {
                Some(record) => println!("stored: {}", record),
                None => println!("stored: <empty>"),
            })
        }
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose { "debug" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
